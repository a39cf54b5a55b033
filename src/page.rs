//! Per-page settings read from `<body>` attributes.
//!
//! `data-page="home"` selects the home layout (scroll-button navigation, the
//! hero header policy); any other value is a sub-page. `data-motion` may hold
//! a JSON object overriding [`MotionConfig`] fields for this page only.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use motion::config::MotionConfig;

/// Attribute on `<body>` naming the page layout.
pub const PAGE_ATTRIBUTE: &str = "data-page";

/// Attribute on `<body>` carrying motion overrides as JSON.
pub const MOTION_ATTRIBUTE: &str = "data-motion";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageKind {
    #[default]
    Home,
    Subpage,
}

impl PageKind {
    /// A missing or empty attribute means the home page.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Home,
            Some(v) if v.eq_ignore_ascii_case("home") => Self::Home,
            Some(_) => Self::Subpage,
        }
    }

    #[must_use]
    pub fn is_home(self) -> bool {
        self == Self::Home
    }
}

/// Whether `document.readyState` says the markup has been parsed.
#[must_use]
pub fn is_document_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Motion tuning for a page: defaults, or the validated overrides in `raw`.
///
/// # Errors
///
/// Returns the parse error when `raw` is not a JSON object of known fields.
pub fn motion_config(raw: Option<&str>) -> Result<MotionConfig, serde_json::Error> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(MotionConfig::default()),
        Some(json) => MotionConfig::from_json(json),
    }
}

/// Everything the boot sequence needs to know about the current page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSettings {
    pub kind: PageKind,
    pub motion: MotionConfig,
}

impl PageSettings {
    /// Read the settings from `<body>`; a bad `data-motion` falls back to defaults.
    #[cfg(feature = "csr")]
    pub fn read(document: &web_sys::Document) -> Self {
        let Some(body) = document.body() else {
            return Self { kind: PageKind::default(), motion: MotionConfig::default() };
        };
        let kind = PageKind::from_attribute(body.get_attribute(PAGE_ATTRIBUTE).as_deref());
        let motion = motion_config(body.get_attribute(MOTION_ATTRIBUTE).as_deref()).unwrap_or_else(|err| {
            log::warn!("page: ignoring {MOTION_ATTRIBUTE}: {err}");
            MotionConfig::default()
        });
        Self { kind, motion }
    }
}
