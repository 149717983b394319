use crate::animation::fit::FIT_MARGIN;
use crate::foundation::core::Canvas;
use crate::foundation::error::{BrenError, BrenResult};

/// Debug drawings layered over the composited figure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DebugOverlays {
    /// Red dots on the attach points of torso and head entries.
    pub attach_points: bool,
    /// Yellow boxes around each entry's opaque bounds.
    pub part_bounds: bool,
}

impl DebugOverlays {
    /// Whether any overlay is enabled.
    pub fn any(&self) -> bool {
        self.attach_points || self.part_bounds
    }
}

/// Stage-wide configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StageSettings {
    /// Output size.
    pub canvas: Canvas,
    /// Gap kept between the figure and the top/bottom edges.
    pub margin: f64,
    /// Run the outline/shadow post-filter.
    pub outline: bool,
    /// Straight-alpha background colour; `None` leaves the background transparent.
    pub background_rgba: Option<[u8; 4]>,
    /// Debug overlays.
    pub debug: DebugOverlays,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            margin: FIT_MARGIN,
            outline: true,
            background_rgba: Some([255, 255, 255, 255]),
            debug: DebugOverlays::default(),
        }
    }
}

impl StageSettings {
    /// Check canvas size and margin.
    pub fn validate(&self) -> BrenResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(BrenError::validation("margin must be finite and >= 0"));
        }
        if 2.0 * self.margin >= self.canvas.height_f64() {
            return Err(BrenError::validation(
                "margin leaves no vertical room on the canvas",
            ));
        }
        Ok(())
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> BrenResult<Self> {
        let settings: Self = serde_json::from_str(s)
            .map_err(|e| BrenError::validation(format!("settings json: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/settings.rs"]
mod tests;
