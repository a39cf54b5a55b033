//! Easing curves and interpolation.
//!
//! All curves take and return values in `[0, 1]`; inputs outside that range
//! are clamped first so callers never extrapolate.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Clamp to `[0, 1]`, mapping NaN to `0`.
#[must_use]
pub fn clamp01(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Cubic ease-out: fast start, decelerating into the end.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - clamp01(t);
    1.0 - inv * inv * inv
}

/// Quadratic ease-in: slow start, accelerating into the end.
#[must_use]
pub fn ease_in_quad(t: f64) -> f64 {
    let t = clamp01(t);
    t * t
}

/// Linear interpolation from `from` (at `t = 0`) to `to` (at `t = 1`).
///
/// Both endpoints are returned exactly, without rounding drift.
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    let t = clamp01(t);
    if t <= 0.0 {
        from
    } else if t >= 1.0 {
        to
    } else {
        from + (to - from) * t
    }
}
