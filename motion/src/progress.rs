//! Scroll progress through a tall container.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::easing::clamp01;

/// How far the viewport has scrolled through a container, in `[0, 1]`.
///
/// `container_top` is the container's top edge relative to the viewport (as
/// reported by `getBoundingClientRect`), so it goes negative as the page
/// scrolls down. A container no taller than the viewport has no scroll range
/// and always reports `0`.
#[must_use]
pub fn scroll_progress(container_top: f64, container_height: f64, viewport_height: f64) -> f64 {
    let range = container_height - viewport_height;
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    clamp01(-container_top / range)
}

/// Re-normalize progress so that `phase_end` maps to `1`.
///
/// Values past the end of the phase saturate at `1`.
#[must_use]
pub fn phase_progress(progress: f64, phase_end: f64) -> f64 {
    if phase_end <= 0.0 {
        return 1.0;
    }
    clamp01(clamp01(progress) / phase_end)
}
