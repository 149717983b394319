//! Point/vector helpers layered over [`kurbo::Vec2`].
//!
//! `kurbo` already covers arithmetic (`+`, `-`, `* f64`, unary `-`) and `dot`. The extension
//! trait adds the handful of operations the rig needs with the exact edge-case behaviour it
//! relies on (upper-clamped interpolation, zero-safe normalization).

use crate::foundation::core::Vec2;

/// Magnitudes below this are treated as zero by [`Vector2Ext::normalize_or_zero`].
pub const NORMALIZE_EPSILON: f64 = 1e-9;

/// Extra vector operations used by the attachment rig.
pub trait Vector2Ext: Sized {
    /// Interpolate from `self` towards `to` by `t`.
    ///
    /// `t` is clamped to at most `1`; negative values are kept and extrapolate backwards.
    fn move_towards(self, to: Self, t: f64) -> Self;

    /// Euclidean length.
    fn magnitude(self) -> f64;

    /// Squared Euclidean length.
    fn magnitude_sqr(self) -> f64;

    /// Distance between two points.
    fn distance_to(self, other: Self) -> f64;

    /// Squared distance between two points.
    fn distance_sqr_to(self, other: Self) -> f64;

    /// Unit vector in the same direction, or the zero vector for near-zero input.
    fn normalize_or_zero(self) -> Self;

    /// Angle from the positive x axis, in radians.
    fn angle_rad(self) -> f64;

    /// Rotate counter-clockwise (in a y-up frame) by `alpha` radians.
    fn rotate_by(self, alpha: f64) -> Self;
}

impl Vector2Ext for Vec2 {
    fn move_towards(self, to: Self, t: f64) -> Self {
        let t = t.min(1.0);
        self + (to - self) * t
    }

    fn magnitude(self) -> f64 {
        self.magnitude_sqr().sqrt()
    }

    fn magnitude_sqr(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    fn distance_to(self, other: Self) -> f64 {
        self.distance_sqr_to(other).sqrt()
    }

    fn distance_sqr_to(self, other: Self) -> f64 {
        (self - other).magnitude_sqr()
    }

    fn normalize_or_zero(self) -> Self {
        let mag = self.magnitude();
        if mag.abs() < NORMALIZE_EPSILON {
            Vec2::ZERO
        } else {
            Vec2::new(self.x / mag, self.y / mag)
        }
    }

    fn angle_rad(self) -> f64 {
        self.y.atan2(self.x)
    }

    fn rotate_by(self, alpha: f64) -> Self {
        let (sin, cos) = alpha.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/vector.rs"]
mod tests;
