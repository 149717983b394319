//! Brenfusion assembles a layered 2D "paper doll" character from body-part sets picked
//! independently from a roster of source characters, and renders the composite.
//!
//! The pipeline per tick:
//!
//! - Place each selected part on a skeletal transform stack ([`TransformStack`])
//! - Track opaque bounds and the figure's vertical extent ([`BoundsCache`], [`ExtentTracker`])
//! - Depth-sort, fit to the canvas and wrap in motion ([`build_frame`], [`Frame`])
//! - Rasterize with the outline/shadow post-filter ([`CpuRenderer`])
//!
//! [`Stage`] drives all of it from a [`SceneState`] and a [`PartImageSource`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub(crate) mod animation;
pub(crate) mod compose;
pub(crate) mod effects;
pub(crate) mod registry;
pub(crate) mod render;
pub(crate) mod rig;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{BrenError, BrenResult};
pub use crate::foundation::math::approach;
pub use crate::foundation::matrix::{Decomposed, Matrix};
pub use crate::foundation::rng::Rng64;
pub use crate::foundation::vector::{NORMALIZE_EPSILON, Vector2Ext};

pub use crate::registry::depth::DepthOrder;
pub use crate::registry::ids::{AttachPoint, BodyPartType, Character};
pub use crate::registry::tables::{
    AttachPointInfo, INTENSITY_CHARACTER, NO_FACE_HAIR, OVERSIZED_HAIR_HEAD, Registry, UNFIT_LEGS,
};

pub use crate::rig::bounds::{BoundsCache, ExtentTracker, OPAQUE_ALPHA, PartBounds, VerticalExtent};
pub use crate::rig::stack::{
    AttachGuard, TransformStack, attach_transform, center_transform, ghost_tail_transform,
};

pub use crate::compose::builder::{BuiltFigure, build_figure};
pub use crate::compose::frame::{DrawCommand, Frame, FrameMotion, build_frame};
pub use crate::compose::overlay::{OverlayShape, overlay_shapes};
pub use crate::compose::queue::{DrawQueue, DrawQueueEntry};

pub use crate::animation::ease::Ease;
pub use crate::animation::fit::{FIT_MARGIN, fit_to_frame};
pub use crate::animation::motion::{DanceSway, FadeIn, IdleFloat, IntensityEvent};

pub use crate::effects::outline::{RING, SHADOW_OFFSET, outline_rgba8_premul};

pub use crate::assets::decode::decode_part_image;
pub use crate::assets::image::{InMemoryStore, PartImage, PartImageSet, PartImageSource};
pub use crate::assets::store::{CHARACTER_DIR, DirectoryStore, part_file_name};

pub use crate::scene::settings::{DebugOverlays, StageSettings};
pub use crate::scene::state::{RandomizeOutcome, Randomizer, SceneState, Selection};

pub use crate::render::backend::{FrameRGBA, FrameRenderer, FrameStyle, RenderSettings};
pub use crate::render::cpu::CpuRenderer;

pub use crate::session::stage::{Stage, TickOutput};

/// Convert a premultiplied frame into straight-alpha RGBA8 in place.
pub fn unpremultiply_frame(frame: &mut FrameRGBA) {
    if frame.premultiplied {
        crate::assets::decode::unpremultiply_rgba8_in_place(&mut frame.data);
        frame.premultiplied = false;
    }
}
