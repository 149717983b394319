//! Per-tick animation state: dance sway, idle float, intro fade and the intensity event.

use crate::animation::ease::Ease;
use crate::foundation::core::Canvas;
use crate::foundation::math::{approach, round_half_up};
use crate::foundation::matrix::Matrix;
use crate::registry::tables::INTENSITY_CHARACTER;
use crate::scene::state::Selection;

/// Float phase advance per tick (π/60, one bob every two seconds at 60 ticks/s).
pub const FLOAT_STEP: f64 = 0.0523598666666667;
/// Dance phase advance per tick at zero intensity.
pub const DANCE_STEP: f64 = 0.1;
/// Peak sway angle in degrees.
pub const DANCE_AMPLITUDE_DEG: f64 = 20.0;
/// Idle float amplitude in pixels.
pub const FLOAT_AMPLITUDE: f64 = 2.0;
/// Fade-in decrease per tick.
pub const FADE_STEP: f64 = 0.05;
/// Ticks between completing the all-Boomhauer selection and the event starting.
pub const INTENSITY_DELAY_TICKS: u32 = 60;
/// Intensity progress increase per tick once active.
pub const INTENSITY_STEP: f64 = 0.0025;

/// Rotation of the whole figure about the canvas center while dancing.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DanceSway {
    /// Phase in radians.
    pub time: f64,
}

impl DanceSway {
    /// Transform for this tick, then advance the phase.
    ///
    /// Not dancing resets the phase and yields identity. `intensity` damps both the angle and
    /// the phase speed.
    pub fn advance(&mut self, canvas: Canvas, dancing: bool, intensity: f64) -> Matrix {
        if !dancing {
            self.time = 0.0;
            return Matrix::IDENTITY;
        }

        let center = canvas.center();
        let calm = 1.0 - intensity;
        let m = Matrix::IDENTITY
            .translate_vector(center)
            .rotate_deg(self.time.sin() * DANCE_AMPLITUDE_DEG * calm)
            .translate_vector(-center);
        self.time += DANCE_STEP * calm;
        m
    }
}

/// Vertical bob plus the intro drop-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IdleFloat {
    /// Phase in radians.
    pub time: f64,
}

impl IdleFloat {
    /// Transform for this tick, then advance the phase unless the intensity event is active.
    pub fn advance(&mut self, canvas: Canvas, fade_in: f64, intensity_active: bool) -> Matrix {
        let drop = round_half_up(-Ease::InCubic.apply(fade_in) * canvas.height_f64());
        let bob = round_half_up(self.time.sin() * FLOAT_AMPLITUDE);
        let m = Matrix::IDENTITY.translate(0.0, drop).translate(0.0, bob);
        if !intensity_active {
            self.time += FLOAT_STEP;
        }
        m
    }
}

/// Intro fade: starts at 1 and settles at 0.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FadeIn {
    /// Remaining fade, 1 = fully faded, 0 = done.
    pub progress: f64,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self { progress: 1.0 }
    }
}

impl FadeIn {
    /// Already finished fade.
    pub fn done() -> Self {
        Self { progress: 0.0 }
    }

    /// Move one tick towards 0.
    pub fn step(&mut self) {
        self.progress = approach(self.progress, 0.0, FADE_STEP);
    }

    /// Opacity of the black background overlay.
    pub fn background_darkness(&self) -> f64 {
        Ease::InSine.apply(self.progress)
    }
}

/// Event triggered by picking the same character for all five slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntensityEvent {
    timer: Option<u32>,
    active: bool,
    progress: f64,
}

impl IntensityEvent {
    /// Event already at full strength.
    pub fn full() -> Self {
        Self {
            timer: None,
            active: true,
            progress: 1.0,
        }
    }

    /// Re-evaluate after a selection change: arm the timer on a full match, reset otherwise.
    pub fn on_selection_changed(&mut self, selection: &Selection) {
        if selection.is_all(INTENSITY_CHARACTER) {
            self.timer = Some(INTENSITY_DELAY_TICKS);
        } else {
            *self = Self::default();
        }
    }

    /// Advance one tick.
    pub fn update(&mut self) {
        if let Some(remaining) = self.timer {
            if remaining == 0 {
                self.timer = None;
                self.active = true;
            } else {
                self.timer = Some(remaining - 1);
            }
        }
        if self.active && self.progress < 1.0 {
            self.progress = approach(self.progress, 1.0, INTENSITY_STEP);
        }
    }

    /// Whether the event is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Event strength in `[0, 1]`; 0 while inactive.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Ticks left before activation, if armed.
    pub fn ticks_remaining(&self) -> Option<u32> {
        self.timer
    }

    /// Progress for the root zoom, present only while active.
    pub fn zoom_progress(&self) -> Option<f64> {
        self.active.then_some(self.progress)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
