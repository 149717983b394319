/// Move `value` towards `target` by at most `amount`, never overshooting.
pub fn approach(value: f64, target: f64, amount: f64) -> f64 {
    if value < target {
        (value + amount).min(target)
    } else {
        (value - amount).max(target)
    }
}

/// Round halves towards +∞, matching canvas-style pixel snapping (`floor(x + 0.5)`).
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
