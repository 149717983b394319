//! The per-tick driver: owns the bounds cache and advances the scene's animation state.

use crate::assets::image::PartImageSource;
use crate::compose::frame::{Frame, FrameMotion, build_frame};
use crate::compose::overlay::overlay_shapes;
use crate::foundation::error::BrenResult;
use crate::registry::tables::Registry;
use crate::render::backend::{FrameRGBA, FrameRenderer, FrameStyle};
use crate::rig::bounds::BoundsCache;
use crate::scene::settings::StageSettings;
use crate::scene::state::{SceneState, Selection};

/// One tick's output before rasterization.
#[derive(Clone, Debug)]
pub struct TickOutput {
    /// Sorted, fitted draw list.
    pub frame: Frame,
    /// Background shade and debug overlays for the renderer.
    pub style: FrameStyle,
}

/// Long-lived compositor session over an image source.
pub struct Stage<S> {
    settings: StageSettings,
    source: S,
    scene: SceneState,
    bounds: BoundsCache,
    ticks: u64,
}

impl<S: PartImageSource> Stage<S> {
    /// Validate settings and the built-in registry, then start at `scene`.
    pub fn new(settings: StageSettings, source: S, scene: SceneState) -> BrenResult<Self> {
        settings.validate()?;
        Registry::validate()?;
        Ok(Self {
            settings,
            source,
            scene,
            bounds: BoundsCache::new(),
            ticks: 0,
        })
    }

    /// Stage settings.
    pub fn settings(&self) -> &StageSettings {
        &self.settings
    }

    /// Current scene.
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Mutable scene access (dance toggle and similar direct edits).
    pub fn scene_mut(&mut self) -> &mut SceneState {
        &mut self.scene
    }

    /// Replace the picks; re-evaluates the intensity event.
    pub fn set_selection(&mut self, selection: Selection) {
        self.scene.set_selection(selection);
    }

    /// Image source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Bounds cache shared by every tick.
    pub fn bounds_cache(&self) -> &BoundsCache {
        &self.bounds
    }

    /// Ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Advance the animation state one tick and build its frame.
    #[tracing::instrument(skip(self), fields(tick = self.ticks))]
    pub fn tick(&mut self) -> BrenResult<TickOutput> {
        let canvas = self.settings.canvas;
        let scene = &mut self.scene;

        scene.fade_in.step();
        scene.intensity.update();

        let motion = FrameMotion {
            dance: scene
                .dance
                .advance(canvas, scene.dancing, scene.intensity.progress()),
            float: scene
                .float
                .advance(canvas, scene.fade_in.progress, scene.intensity.is_active()),
        };

        let frame = build_frame(
            &scene.selection,
            &self.settings,
            motion,
            scene.intensity.zoom_progress(),
            &self.source,
            &mut self.bounds,
        )?;

        let mut darkness = scene.fade_in.background_darkness();
        if let Some(progress) = scene.intensity.zoom_progress() {
            darkness = 1.0 - (1.0 - darkness) * (1.0 - progress);
        }
        let style = FrameStyle {
            background_darkness: darkness,
            overlays: overlay_shapes(&frame, self.settings.debug)?,
        };

        self.ticks += 1;
        Ok(TickOutput { frame, style })
    }

    /// Run `ticks` ticks (at least one) and render the last with `renderer`.
    pub fn render_after(
        &mut self,
        ticks: u32,
        renderer: &mut dyn FrameRenderer,
    ) -> BrenResult<FrameRGBA> {
        let mut out = self.tick()?;
        for _ in 1..ticks {
            out = self.tick()?;
        }
        renderer.render(&out.frame, &out.style)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/stage.rs"]
mod tests;
