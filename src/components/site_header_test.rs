use motion::header::{HeaderKind, KIND_ATTRIBUTE};

use super::*;

#[test]
fn rendered_attribute_is_the_one_the_controller_reads() {
    assert_eq!(KIND_ATTRIBUTE, "data-header");
}

#[test]
fn header_kind_round_trips_through_controller() {
    assert_eq!(HeaderKind::from_attribute(Some(header_kind(true))), HeaderKind::Home);
    assert_eq!(HeaderKind::from_attribute(Some(header_kind(false))), HeaderKind::Subpage);
}

#[test]
fn home_header_starts_at_top() {
    assert!(header_class(true).ends_with(" header-at-top"));
    assert!(!header_class(false).contains("header-at-top"));
}

#[test]
fn header_never_renders_hidden() {
    assert!(!header_class(true).contains(motion::header::HIDDEN_CLASS));
    assert!(!header_class(false).contains(motion::header::HIDDEN_CLASS));
}

#[test]
fn logo_links_to_hero_or_home_page() {
    assert_eq!(logo_href(true), "#hero");
    assert_eq!(logo_href(false), "index.html");
}
