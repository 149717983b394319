use std::sync::Arc;

use crate::animation::fit::fit_to_frame;
use crate::assets::image::{PartImage, PartImageSource};
use crate::compose::builder::build_figure;
use crate::foundation::error::BrenResult;
use crate::foundation::matrix::Matrix;
use crate::registry::ids::{BodyPartType, Character};
use crate::rig::bounds::{BoundsCache, PartBounds, VerticalExtent};
use crate::scene::settings::StageSettings;
use crate::scene::state::Selection;

/// Whole-figure motion applied on top of the fit, outermost first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMotion {
    /// Dance sway.
    pub dance: Matrix,
    /// Idle float and intro drop.
    pub float: Matrix,
}

impl Default for FrameMotion {
    fn default() -> Self {
        Self {
            dance: Matrix::IDENTITY,
            float: Matrix::IDENTITY,
        }
    }
}

/// Draw one image at its own origin under `transform` (canvas pixels).
#[derive(Clone, Debug)]
pub struct DrawCommand {
    /// Layer kind.
    pub part: BodyPartType,
    /// Source character.
    pub character: Character,
    /// Artwork.
    pub image: Arc<PartImage>,
    /// `dance ∘ float ∘ fit ∘ entry`.
    pub transform: Matrix,
    /// Opaque bounds of the part's main image, if any.
    pub bounds: Option<PartBounds>,
}

/// Back-to-front draw list for one tick.
#[derive(Clone, Debug)]
pub struct Frame {
    commands: Vec<DrawCommand>,
    extent: Option<VerticalExtent>,
    fit: Matrix,
    pushes: usize,
}

impl Frame {
    /// Commands in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Vertical extent of the figure before fitting.
    pub fn vertical_extent(&self) -> Option<VerticalExtent> {
        self.extent
    }

    /// Fit-to-canvas transform used for this frame.
    pub fn fit(&self) -> Matrix {
        self.fit
    }

    /// Transform pushes made while building.
    pub fn push_count(&self) -> usize {
        self.pushes
    }

    /// Whether nothing will be drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Build, sort, fit and wrap the draw list for `selection`.
///
/// `intensity_zoom` is the intensity progress while that event is active.
#[tracing::instrument(skip_all, fields(torso = %selection.torso))]
pub fn build_frame(
    selection: &Selection,
    settings: &StageSettings,
    motion: FrameMotion,
    intensity_zoom: Option<f64>,
    source: &dyn PartImageSource,
    bounds: &mut BoundsCache,
) -> BrenResult<Frame> {
    let figure = build_figure(selection, settings.canvas, intensity_zoom, source, bounds)?;
    let fit = fit_to_frame(
        figure.extent,
        settings.canvas,
        settings.margin,
        selection.legs,
    );
    let outer = motion.dance.transform_matrix(motion.float).transform_matrix(fit);

    let commands: Vec<DrawCommand> = figure
        .queue
        .into_entries()
        .into_iter()
        .map(|e| DrawCommand {
            part: e.part,
            character: e.character,
            image: e.image,
            transform: outer.transform_matrix(e.transform),
            bounds: e.bounds,
        })
        .collect();

    tracing::debug!(
        commands = commands.len(),
        pushes = figure.pushes,
        "frame built"
    );
    Ok(Frame {
        commands,
        extent: figure.extent,
        fit,
        pushes: figure.pushes,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/frame.rs"]
mod tests;
