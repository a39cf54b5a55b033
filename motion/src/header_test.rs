#![allow(clippy::float_cmp)]

use super::*;

fn home() -> HeaderCore {
    HeaderCore::new(HeaderKind::Home, &MotionConfig::default())
}

fn subpage() -> HeaderCore {
    HeaderCore::new(HeaderKind::Subpage, &MotionConfig::default())
}

fn scroll(core: &mut HeaderCore, from: f64, to: f64) -> Visibility {
    core.observe(from);
    core.observe(to)
}

// --- HeaderKind ---

#[test]
fn kind_defaults_to_home() {
    assert_eq!(HeaderKind::from_attribute(None), HeaderKind::Home);
    assert_eq!(HeaderKind::from_attribute(Some("home")), HeaderKind::Home);
    assert_eq!(HeaderKind::from_attribute(Some("")), HeaderKind::Home);
}

#[test]
fn kind_reads_subpage_attribute() {
    assert_eq!(HeaderKind::from_attribute(Some("subpage")), HeaderKind::Subpage);
    assert_eq!(HeaderKind::from_attribute(Some("SubPage")), HeaderKind::Subpage);
}

// --- Home policy ---

#[test]
fn scrolling_down_below_threshold_keeps_header() {
    assert_eq!(scroll(&mut home(), 50.0, 80.0), Visibility::Shown);
}

#[test]
fn scrolling_down_past_threshold_hides_header() {
    assert_eq!(scroll(&mut home(), 150.0, 200.0), Visibility::Hidden);
}

#[test]
fn scrolling_up_reveals_header() {
    assert_eq!(scroll(&mut home(), 200.0, 150.0), Visibility::Shown);
}

#[test]
fn threshold_is_strict() {
    assert_eq!(scroll(&mut home(), 90.0, 100.0), Visibility::Shown);
    assert_eq!(scroll(&mut home(), 90.0, 100.5), Visibility::Hidden);
}

#[test]
fn no_movement_shows_header() {
    assert_eq!(scroll(&mut home(), 400.0, 400.0), Visibility::Shown);
}

#[test]
fn first_tick_compares_against_zero() {
    let mut core = home();
    assert_eq!(core.observe(300.0), Visibility::Hidden);
}

#[test]
fn last_scroll_y_updates_unconditionally() {
    let mut core = home();
    core.observe(40.0);
    assert_eq!(core.last_scroll_y(), 40.0);
    core.observe(500.0);
    assert_eq!(core.last_scroll_y(), 500.0);
    core.observe(20.0);
    assert_eq!(core.last_scroll_y(), 20.0);
}

#[test]
fn hide_iff_down_and_past_threshold() {
    let offsets = [0.0, 30.0, 99.0, 100.0, 101.0, 250.0, 180.0, 180.0, 90.0, 400.0];
    let mut core = home();
    let mut prev = 0.0;
    for y in offsets {
        let expected = if y > prev && y > 100.0 { Visibility::Hidden } else { Visibility::Shown };
        assert_eq!(core.observe(y), expected, "at {prev} -> {y}");
        prev = y;
    }
}

// --- Sub-page policy ---

#[test]
fn subpage_hides_from_threshold_inclusive() {
    assert_eq!(scroll(&mut subpage(), 40.0, 50.0), Visibility::Hidden);
    assert_eq!(scroll(&mut subpage(), 30.0, 49.0), Visibility::Shown);
}

#[test]
fn subpage_reveals_on_scroll_up() {
    assert_eq!(scroll(&mut subpage(), 300.0, 260.0), Visibility::Shown);
}

#[test]
fn threshold_follows_config() {
    let cfg = MotionConfig { header_hide_threshold_px: 10.0, ..MotionConfig::default() };
    let mut core = HeaderCore::new(HeaderKind::Home, &cfg);
    assert_eq!(scroll(&mut core, 5.0, 20.0), Visibility::Hidden);
    assert_eq!(core.kind(), HeaderKind::Home);
}
