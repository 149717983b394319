use std::f64::consts::FRAC_PI_2;

/// Easing curves applied to normalized `[0, 1]` progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-in, used by the intro drop.
    InCubic,
    /// Sine ease-in, used by the intro background fade.
    InSine,
}

impl Ease {
    /// Apply this curve to progress `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InCubic => t * t * t,
            Self::InSine => 1.0 - (t * FRAC_PI_2).cos(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
