#![allow(clippy::float_cmp)]

use super::*;

// --- scroll_progress ---

#[test]
fn progress_is_zero_at_container_top() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
}

#[test]
fn progress_is_zero_before_container_reaches_top() {
    assert_eq!(scroll_progress(250.0, 3000.0, 1000.0), 0.0);
}

#[test]
fn progress_is_linear_in_range() {
    assert_eq!(scroll_progress(-500.0, 3000.0, 1000.0), 0.25);
    assert_eq!(scroll_progress(-1000.0, 3000.0, 1000.0), 0.5);
}

#[test]
fn progress_saturates_at_one() {
    assert_eq!(scroll_progress(-2000.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(-9000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn zero_scroll_range_is_zero_progress() {
    assert_eq!(scroll_progress(-400.0, 900.0, 900.0), 0.0);
}

#[test]
fn container_shorter_than_viewport_is_zero_progress() {
    assert_eq!(scroll_progress(-400.0, 600.0, 900.0), 0.0);
}

#[test]
fn non_finite_inputs_are_zero_progress() {
    assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(-10.0, f64::NAN, 1000.0), 0.0);
    assert_eq!(scroll_progress(-10.0, f64::INFINITY, 1000.0), 0.0);
}

#[test]
fn progress_is_monotonic_and_bounded_over_scroll_range() {
    let (height, viewport) = (4200.0, 860.0);
    let mut prev = 0.0;
    let mut offset = -200.0;
    while offset <= height {
        let p = scroll_progress(-offset, height, viewport);
        assert!((0.0..=1.0).contains(&p), "progress {p} out of range at {offset}");
        assert!(p >= prev, "progress fell from {prev} to {p} at {offset}");
        prev = p;
        offset += 17.0;
    }
    assert_eq!(prev, 1.0);
}

// --- phase_progress ---

#[test]
fn phase_progress_rescales_to_phase_end() {
    assert_eq!(phase_progress(0.4, 0.8), 0.5);
    assert_eq!(phase_progress(0.8, 0.8), 1.0);
}

#[test]
fn phase_progress_saturates_past_phase_end() {
    assert_eq!(phase_progress(0.95, 0.8), 1.0);
}

#[test]
fn phase_progress_degenerate_end_is_complete() {
    assert_eq!(phase_progress(0.1, 0.0), 1.0);
}
