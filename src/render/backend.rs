use crate::compose::frame::Frame;
use crate::compose::overlay::OverlayShape;
use crate::foundation::error::BrenResult;
use crate::scene::settings::StageSettings;

/// Rendered pixels, row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied.
    pub premultiplied: bool,
}

/// Backend configuration fixed for a stage.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Straight-alpha background; `None` = transparent.
    pub clear_rgba: Option<[u8; 4]>,
    /// Run the outline/shadow post-filter over the figure layer.
    pub outline: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_rgba: None,
            outline: true,
        }
    }
}

impl From<&StageSettings> for RenderSettings {
    fn from(s: &StageSettings) -> Self {
        Self {
            clear_rgba: s.background_rgba,
            outline: s.outline,
        }
    }
}

/// Per-frame extras drawn around the figure.
#[derive(Clone, Debug, Default)]
pub struct FrameStyle {
    /// Opacity of a black layer over the background, `[0, 1]`.
    pub background_darkness: f64,
    /// Debug shapes drawn on top of everything.
    pub overlays: Vec<OverlayShape>,
}

/// Turns a [`Frame`] into pixels.
pub trait FrameRenderer {
    /// Render `frame` with `style` onto a fresh canvas.
    fn render(&mut self, frame: &Frame, style: &FrameStyle) -> BrenResult<FrameRGBA>;
}
