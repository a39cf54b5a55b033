#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn ratio() -> f64 {
    2238.0 / 1222.0
}

fn assert_keeps_aspect(size: Size) {
    assert!(approx_eq(size.width / size.height, ratio()), "aspect drifted: {size:?}");
}

// --- Viewport classification ---

#[test]
fn mobile_breakpoint_is_inclusive() {
    let cfg = MotionConfig::default();
    assert!(Viewport::new(767.0, 900.0).is_mobile(&cfg));
    assert!(Viewport::new(375.0, 812.0).is_mobile(&cfg));
    assert!(!Viewport::new(768.0, 900.0).is_mobile(&cfg));
}

#[test]
fn short_and_tall_viewports() {
    let cfg = MotionConfig::default();
    assert!(Viewport::new(1440.0, 900.0).is_short(&cfg));
    assert!(!Viewport::new(1440.0, 901.0).is_short(&cfg));
    assert!(Viewport::new(1440.0, 1100.0).is_tall(&cfg));
    assert!(!Viewport::new(1440.0, 1099.0).is_tall(&cfg));
}

// --- initial_hero_size ---

#[test]
fn initial_size_uses_width_fraction_when_uncapped() {
    let cfg = MotionConfig::default();
    let size = initial_hero_size(Viewport::new(1440.0, 900.0), &cfg);
    assert!(approx_eq(size.width, 1440.0 * 0.62));
    assert_keeps_aspect(size);
}

#[test]
fn initial_size_is_capped_by_normal_height_fraction() {
    let cfg = MotionConfig::default();
    let size = initial_hero_size(Viewport::new(1920.0, 1080.0), &cfg);
    assert!(approx_eq(size.height, 1080.0 * 0.55));
    assert_keeps_aspect(size);
}

#[test]
fn initial_size_uses_tighter_cap_on_tall_viewports() {
    let cfg = MotionConfig::default();
    let size = initial_hero_size(Viewport::new(2560.0, 1440.0), &cfg);
    assert!(approx_eq(size.height, 1440.0 * 0.45));
    assert_keeps_aspect(size);
}

#[test]
fn initial_size_never_exceeds_max_width() {
    let cfg = MotionConfig::default();
    let size = initial_hero_size(Viewport::new(5000.0, 4000.0), &cfg);
    assert!(size.width <= 1200.0 + EPSILON);
}

#[test]
fn initial_size_uses_smaller_max_on_short_viewports() {
    let cfg = MotionConfig { normal_height_cap: 1.0, ..MotionConfig::default() };
    let size = initial_hero_size(Viewport::new(3000.0, 900.0), &cfg);
    assert!(approx_eq(size.width, 1080.0));
}

#[test]
fn initial_size_is_raised_to_min_width() {
    let cfg = MotionConfig::default();
    let size = initial_hero_size(Viewport::new(800.0, 400.0), &cfg);
    assert!(approx_eq(size.width, 480.0));
    assert_keeps_aspect(size);
}

#[test]
fn min_width_never_exceeds_viewport_width() {
    let cfg = MotionConfig::default();
    let size = initial_hero_size(Viewport::new(400.0, 300.0), &cfg);
    assert!(approx_eq(size.width, 400.0));
}

#[test]
fn initial_size_of_empty_viewport_is_zero() {
    let cfg = MotionConfig::default();
    let size = initial_hero_size(Viewport::new(0.0, 0.0), &cfg);
    assert_eq!(size.width, 0.0);
    assert_eq!(size.height, 0.0);
}

// --- cover_size ---

#[test]
fn cover_size_of_wide_viewport_matches_width() {
    let cfg = MotionConfig::default();
    let size = cover_size(Viewport::new(3000.0, 1000.0), &cfg);
    assert_eq!(size.width, 3000.0);
    assert!(size.height >= 1000.0);
}

#[test]
fn cover_size_of_tall_viewport_matches_height() {
    let cfg = MotionConfig::default();
    let size = cover_size(Viewport::new(1440.0, 900.0), &cfg);
    assert!(approx_eq(size.height, 900.0));
    assert!(size.width >= 1440.0);
    assert_keeps_aspect(size);
}

#[test]
fn cover_size_always_covers() {
    let cfg = MotionConfig::default();
    for (w, h) in [(1024.0, 768.0), (1920.0, 1080.0), (2560.0, 1440.0), (1280.0, 1400.0)] {
        let size = cover_size(Viewport::new(w, h), &cfg);
        assert!(size.width >= w - EPSILON && size.height >= h - EPSILON, "{size:?} misses {w}x{h}");
    }
}

#[test]
fn cover_is_never_smaller_than_initial() {
    let cfg = MotionConfig::default();
    for (w, h) in [(1024.0, 768.0), (1920.0, 1080.0), (2560.0, 1440.0), (800.0, 400.0)] {
        let vp = Viewport::new(w, h);
        let initial = initial_hero_size(vp, &cfg);
        let cover = cover_size(vp, &cfg);
        assert!(cover.width >= initial.width);
        assert!(cover.height >= initial.height);
    }
}

// --- centered_offset ---

#[test]
fn centered_offset_for_smaller_box() {
    let (left, top) = centered_offset(Size::new(800.0, 400.0), Viewport::new(1200.0, 800.0));
    assert_eq!(left, 200.0);
    assert_eq!(top, 200.0);
}

#[test]
fn centered_offset_for_larger_box_is_negative() {
    let (left, top) = centered_offset(Size::new(1400.0, 900.0), Viewport::new(1200.0, 800.0));
    assert_eq!(left, -100.0);
    assert_eq!(top, -50.0);
}
