//! Opaque-pixel bounds of part artwork and the vertical extent of a built figure.

use std::collections::HashMap;

use crate::assets::image::{PartImage, PartImageSource};
use crate::foundation::core::Rect;
use crate::foundation::matrix::Matrix;
use crate::registry::ids::{BodyPartType, Character};

/// Minimum alpha for a pixel to count as opaque.
pub const OPAQUE_ALPHA: u8 = 127;

/// Bounding box of the opaque pixels of an image, in its native pixel space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PartBounds {
    /// Leftmost opaque column.
    pub x_min: f64,
    /// Topmost opaque row.
    pub y_min: f64,
    /// Rightmost opaque column.
    pub x_max: f64,
    /// Bottommost opaque row.
    pub y_max: f64,
    /// `x_max - x_min`.
    pub width: f64,
    /// `y_max - y_min`.
    pub height: f64,
}

impl PartBounds {
    /// Bounds from min/max corners.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
            width: x_max - x_min,
            height: y_max - y_min,
        }
    }

    /// Scan `image` for pixels with alpha ≥ [`OPAQUE_ALPHA`]. `None` when there are none.
    pub fn scan(image: &PartImage) -> Option<Self> {
        let mut min = (u32::MAX, u32::MAX);
        let mut max = (0u32, 0u32);
        let mut any = false;

        for y in 0..image.height() {
            for x in 0..image.width() {
                if image.alpha_at(x, y) < OPAQUE_ALPHA {
                    continue;
                }
                any = true;
                min = (min.0.min(x), min.1.min(y));
                max = (max.0.max(x), max.1.max(y));
            }
        }

        any.then(|| {
            Self::new(
                f64::from(min.0),
                f64::from(min.1),
                f64::from(max.0),
                f64::from(max.1),
            )
        })
    }

    /// Same box as a [`Rect`].
    pub fn rect(&self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }
}

/// Lazily filled, never-evicted cache of part bounds keyed by (part, character).
#[derive(Clone, Debug, Default)]
pub struct BoundsCache {
    entries: HashMap<(BodyPartType, Character), Option<PartBounds>>,
    scans: usize,
}

impl BoundsCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds of the main image of `(part, character)`, scanning it on first request.
    ///
    /// Missing artwork and fully transparent artwork both cache as `None`.
    pub fn bounds_of(
        &mut self,
        part: BodyPartType,
        character: Character,
        source: &dyn PartImageSource,
    ) -> Option<PartBounds> {
        if let Some(cached) = self.entries.get(&(part, character)) {
            return *cached;
        }

        let bounds = match source.images(part, character) {
            Some(set) => {
                self.scans += 1;
                PartBounds::scan(set.main())
            }
            None => None,
        };
        tracing::debug!(%part, %character, ?bounds, "bounds cached");
        self.entries.insert((part, character), bounds);
        bounds
    }

    /// Number of pixel scans performed so far.
    pub fn scan_count(&self) -> usize {
        self.scans
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Topmost and bottommost canvas y covered by the placed parts.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VerticalExtent {
    /// Smallest y.
    pub top: f64,
    /// Largest y.
    pub bottom: f64,
}

impl VerticalExtent {
    /// `bottom - top`.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Accumulates the vertical extent of one build.
#[derive(Clone, Copy, Debug)]
pub struct ExtentTracker {
    top: f64,
    bottom: f64,
}

impl Default for ExtentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtentTracker {
    /// Tracker with nothing recorded (top = +∞, bottom = −∞).
    pub fn new() -> Self {
        Self {
            top: f64::INFINITY,
            bottom: f64::NEG_INFINITY,
        }
    }

    /// Forget everything recorded.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Extend the extent by `bounds` placed under `transform`.
    ///
    /// Uses the decomposed vertical translation and scale, which is exact for the
    /// rotation-free transforms the rig produces.
    pub fn record_placement(&mut self, transform: Matrix, bounds: &PartBounds) {
        let d = transform.decompose();
        self.top = self.top.min(d.translate.y + bounds.y_min * d.scale.y);
        self.bottom = self.bottom.max(d.translate.y + bounds.y_max * d.scale.y);
    }

    /// Extent recorded so far, `None` when nothing was recorded.
    pub fn vertical_extent(&self) -> Option<VerticalExtent> {
        (self.top <= self.bottom).then_some(VerticalExtent {
            top: self.top,
            bottom: self.bottom,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/bounds.rs"]
mod tests;
