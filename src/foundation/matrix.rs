//! Canvas-style 2×3 affine matrices.
//!
//! Coefficients follow the canvas `setTransform(a, b, c, d, e, f)` layout:
//!
//! ```text
//! | a c e |
//! | b d f |
//! | 0 0 1 |
//! ```
//!
//! Every builder method returns a new matrix equal to "apply the new operation first, then
//! `self`", so chained calls read outermost-first, like canvas transform calls.

use std::f64::consts::PI;

use crate::foundation::core::{Affine, Point, Vec2};

const DEG_TO_RAD: f64 = 0.017453292519943295;

/// Affine transform value backed by [`kurbo::Affine`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Matrix(Affine);

/// Result of [`Matrix::decompose`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposed {
    /// Per-axis scale.
    pub scale: Vec2,
    /// Translation (`e`, `f`).
    pub translate: Vec2,
    /// Rotation in radians.
    pub rotation: f64,
    /// Skew angles in radians.
    pub skew: Vec2,
}

impl Decomposed {
    /// Rebuild a matrix in QR order: translate → rotate → scale → skew X.
    ///
    /// `skew.y` is only produced by the degenerate `a = b = 0` branch and is not reapplied.
    pub fn compose(&self) -> Matrix {
        Matrix::IDENTITY
            .translate_vector(self.translate)
            .rotate(self.rotation)
            .scale_vector(self.scale)
            .transform(1.0, 0.0, self.skew.x.tan(), 1.0, 0.0, 0.0)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for Matrix {
    fn from(a: Affine) -> Self {
        Self(a)
    }
}

impl From<Matrix> for Affine {
    fn from(m: Matrix) -> Self {
        m.0
    }
}

impl Matrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Build a matrix from `[a, b, c, d, e, f]`.
    pub fn new(coeffs: [f64; 6]) -> Self {
        Self(Affine::new(coeffs))
    }

    /// Coefficients as `[a, b, c, d, e, f]`.
    pub fn coeffs(self) -> [f64; 6] {
        self.0.as_coeffs()
    }

    /// Underlying `kurbo` affine.
    pub fn affine(self) -> Affine {
        self.0
    }

    /// Multiply by raw coefficients: the result applies `(a2..f2)` first, then `self`.
    pub fn transform(self, a2: f64, b2: f64, c2: f64, d2: f64, e2: f64, f2: f64) -> Self {
        Self(self.0 * Affine::new([a2, b2, c2, d2, e2, f2]))
    }

    /// Compose with a child transform: the result applies `child` first, then `self`.
    pub fn transform_matrix(self, child: Matrix) -> Self {
        Self(self.0 * child.0)
    }

    /// Rotate by `angle` radians.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        self.transform(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Rotate by `angle` degrees.
    pub fn rotate_deg(self, angle: f64) -> Self {
        self.rotate(angle * DEG_TO_RAD)
    }

    /// Non-uniform scale.
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.transform(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Uniform scale.
    pub fn scale_uniform(self, s: f64) -> Self {
        self.scale(s, s)
    }

    /// Non-uniform scale taken from a vector.
    pub fn scale_vector(self, v: Vec2) -> Self {
        self.scale(v.x, v.y)
    }

    /// Translation.
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        self.transform(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Translation taken from a vector.
    pub fn translate_vector(self, v: Vec2) -> Self {
        self.translate(v.x, v.y)
    }

    /// Reset to identity in place.
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Map a point through this transform.
    pub fn apply(self, p: Point) -> Point {
        self.0 * p
    }

    /// Translation component (`e`, `f`).
    pub fn translation(self) -> Vec2 {
        let [_, _, _, _, e, f] = self.coeffs();
        Vec2::new(e, f)
    }

    /// Coefficient-wise comparison within `eps`.
    pub fn approx_eq(self, other: Matrix, eps: f64) -> bool {
        self.coeffs()
            .iter()
            .zip(other.coeffs().iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// QR-like decomposition into translate → rotate → scale → skew.
    ///
    /// Degenerate inputs are handled algebraically: when `a = b = 0` the rotation is derived
    /// from the second column, and an all-zero linear part yields a zero scale.
    pub fn decompose(self) -> Decomposed {
        let [a, b, c, d, e, f] = self.coeffs();
        let determ = a * d - b * c;

        let mut rotation = 0.0;
        let scale;
        let mut skew = Vec2::ZERO;

        if a != 0.0 || b != 0.0 {
            let r = (a * a + b * b).sqrt();
            rotation = if b > 0.0 {
                (a / r).acos()
            } else {
                -(a / r).acos()
            };
            scale = Vec2::new(r, determ / r);
            skew.x = ((a * c + b * d) / (r * r)).atan();
        } else if c != 0.0 || d != 0.0 {
            let s = (c * c + d * d).sqrt();
            rotation = PI * 0.5
                - if d > 0.0 {
                    (-c / s).acos()
                } else {
                    -(c / s).acos()
                };
            scale = Vec2::new(determ / s, s);
            skew.y = ((a * c + b * d) / (s * s)).atan();
        } else {
            scale = Vec2::ZERO;
        }

        Decomposed {
            scale,
            translate: Vec2::new(e, f),
            rotation,
            skew,
        }
    }

    /// LU-like decomposition into translate → skew Y → scale → skew X.
    pub fn decompose_lu(self) -> Decomposed {
        let [a, b, c, d, e, f] = self.coeffs();
        let determ = a * d - b * c;

        let mut rotation = 0.0;
        let scale;
        let mut skew = Vec2::ZERO;

        if a != 0.0 {
            skew = Vec2::new((c / a).atan(), (b / a).atan());
            scale = Vec2::new(a, determ / a);
        } else if b != 0.0 {
            rotation = PI * 0.5;
            scale = Vec2::new(b, determ / b);
            skew.x = (d / b).atan();
        } else {
            scale = Vec2::new(c, d);
            skew.x = PI * 0.25;
        }

        Decomposed {
            scale,
            translate: Vec2::new(e, f),
            rotation,
            skew,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/matrix.rs"]
mod tests;
