#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_consts() {
    let cfg = MotionConfig::default();
    assert_eq!(cfg.expand_phase_end, 0.8);
    assert_eq!(cfg.mobile_breakpoint_px, 767.0);
    assert_eq!(cfg.start_radius_px, 8.0);
    assert_eq!(cfg.header_hide_threshold_px, 100.0);
}

#[test]
fn aspect_ratio_is_width_over_height() {
    let cfg = MotionConfig::default();
    assert!((cfg.aspect_ratio() - 2238.0 / 1222.0).abs() < 1e-12);
}

#[test]
fn from_json_empty_object_is_default() {
    let cfg = MotionConfig::from_json("{}").expect("empty object parses");
    assert_eq!(cfg, MotionConfig::default());
}

#[test]
fn from_json_overrides_subset() {
    let cfg = MotionConfig::from_json(r#"{"expandPhaseEnd": 0.7, "mobileBreakpointPx": 1023}"#)
        .expect("partial override parses");
    assert_eq!(cfg.expand_phase_end, 0.7);
    assert_eq!(cfg.mobile_breakpoint_px, 1023.0);
    assert_eq!(cfg.start_radius_px, 8.0);
}

#[test]
fn from_json_rejects_non_object() {
    assert!(MotionConfig::from_json("not json").is_err());
    assert!(MotionConfig::from_json(r#"{"expandPhaseEnd": "soon"}"#).is_err());
}

#[test]
fn validated_replaces_out_of_range_phase_end() {
    let cfg = MotionConfig { expand_phase_end: 0.0, ..MotionConfig::default() }.validated();
    assert_eq!(cfg.expand_phase_end, 0.8);

    let cfg = MotionConfig { expand_phase_end: 1.5, ..MotionConfig::default() }.validated();
    assert_eq!(cfg.expand_phase_end, 0.8);

    let cfg = MotionConfig { expand_phase_end: 1.0, ..MotionConfig::default() }.validated();
    assert_eq!(cfg.expand_phase_end, 1.0);
}

#[test]
fn validated_replaces_negative_and_nan_values() {
    let cfg = MotionConfig {
        start_radius_px: -4.0,
        header_hide_threshold_px: f64::NAN,
        aspect_height: 0.0,
        ..MotionConfig::default()
    }
    .validated();
    assert_eq!(cfg.start_radius_px, 8.0);
    assert_eq!(cfg.header_hide_threshold_px, 100.0);
    assert_eq!(cfg.aspect_height, 1222.0);
}

#[test]
fn validated_keeps_negative_nudge() {
    let cfg = MotionConfig { short_viewport_nudge_px: -6.0, ..MotionConfig::default() }.validated();
    assert_eq!(cfg.short_viewport_nudge_px, -6.0);
}
