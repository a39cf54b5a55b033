#![allow(clippy::float_cmp)]

use super::*;

// --- PageKind ---

#[test]
fn missing_or_empty_attribute_is_home() {
    assert_eq!(PageKind::from_attribute(None), PageKind::Home);
    assert_eq!(PageKind::from_attribute(Some("")), PageKind::Home);
    assert_eq!(PageKind::from_attribute(Some("  ")), PageKind::Home);
}

#[test]
fn home_attribute_is_case_insensitive() {
    assert_eq!(PageKind::from_attribute(Some("home")), PageKind::Home);
    assert_eq!(PageKind::from_attribute(Some("HOME")), PageKind::Home);
}

#[test]
fn other_values_are_subpages() {
    assert_eq!(PageKind::from_attribute(Some("about")), PageKind::Subpage);
    assert_eq!(PageKind::from_attribute(Some("privacy")), PageKind::Subpage);
    assert!(!PageKind::Subpage.is_home());
}

// --- motion_config ---

#[test]
fn no_overrides_use_defaults() {
    assert_eq!(motion_config(None).expect("defaults"), MotionConfig::default());
    assert_eq!(motion_config(Some(" ")).expect("defaults"), MotionConfig::default());
}

#[test]
fn overrides_replace_named_fields_only() {
    let cfg = motion_config(Some(r#"{"expandPhaseEnd":0.6,"headerHideThresholdPx":40}"#)).expect("valid overrides");
    assert_eq!(cfg.expand_phase_end, 0.6);
    assert_eq!(cfg.header_hide_threshold_px, 40.0);
    assert_eq!(cfg.start_radius_px, MotionConfig::default().start_radius_px);
}

#[test]
fn malformed_overrides_are_errors() {
    assert!(motion_config(Some("{not json")).is_err());
}

// --- is_document_parsed ---

#[test]
fn loading_document_is_not_parsed() {
    assert!(!is_document_parsed("loading"));
}

#[test]
fn interactive_and_complete_documents_are_parsed() {
    assert!(is_document_parsed("interactive"));
    assert!(is_document_parsed("complete"));
}
