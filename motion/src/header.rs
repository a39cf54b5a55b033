//! Fixed header hide/reveal controller.
//!
//! The header hides while the reader scrolls down past a threshold and comes
//! back as soon as they scroll up. Only scroll direction and offset matter;
//! the hero parallax progress plays no part.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::config::MotionConfig;

/// Class toggled on the header element while it is hidden.
pub const HIDDEN_CLASS: &str = "header-hidden";

/// Attribute on the header marking the sub-page variant (`data-header="subpage"`).
pub const KIND_ATTRIBUTE: &str = "data-header";

/// Which page variant the header belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderKind {
    /// Landing page: hides only once scrolled strictly past the threshold.
    #[default]
    Home,
    /// Any other page: stays visible while within the threshold of the top.
    Subpage,
}

impl HeaderKind {
    /// Read the variant from a `data-header` attribute value.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("subpage") => Self::Subpage,
            _ => Self::Home,
        }
    }
}

/// Whether the header should currently be on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

/// Direction-tracking state, independent of the DOM.
#[derive(Debug, Clone)]
pub struct HeaderCore {
    kind: HeaderKind,
    threshold: f64,
    last_scroll_y: f64,
}

impl HeaderCore {
    #[must_use]
    pub fn new(kind: HeaderKind, config: &MotionConfig) -> Self {
        let threshold = match kind {
            HeaderKind::Home => config.header_hide_threshold_px,
            HeaderKind::Subpage => config.subpage_header_threshold_px,
        };
        Self { kind, threshold, last_scroll_y: 0.0 }
    }

    #[must_use]
    pub fn kind(&self) -> HeaderKind {
        self.kind
    }

    #[must_use]
    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    /// Feed the current scroll offset and get the resulting visibility.
    ///
    /// The offset is always remembered, whatever the outcome.
    pub fn observe(&mut self, scroll_y: f64) -> Visibility {
        let scrolling_down = scroll_y > self.last_scroll_y;
        let past_threshold = match self.kind {
            HeaderKind::Home => scroll_y > self.threshold,
            HeaderKind::Subpage => scroll_y >= self.threshold,
        };
        self.last_scroll_y = scroll_y;
        if scrolling_down && past_threshold { Visibility::Hidden } else { Visibility::Shown }
    }
}

/// Header controller bound to the `#header` element.
pub struct Header {
    element: HtmlElement,
    core: HeaderCore,
}

impl Header {
    /// Resolve `#header` and build the controller.
    ///
    /// Returns `None` when the page has no header, in which case the subsystem
    /// stays off for the page's lifetime.
    #[must_use]
    pub fn attach(document: &Document, config: &MotionConfig) -> Option<Self> {
        let element = document.get_element_by_id("header")?;
        let kind = HeaderKind::from_attribute(element.get_attribute(KIND_ATTRIBUTE).as_deref());
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            return None;
        };
        Some(Self { element, core: HeaderCore::new(kind, config) })
    }

    #[must_use]
    pub fn core(&self) -> &HeaderCore {
        &self.core
    }

    /// Read `scrollY`, decide visibility, and toggle the hidden class.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the scroll read or class write fails.
    pub fn update(&mut self, window: &Window) -> Result<(), JsValue> {
        let visibility = self.core.observe(window.scroll_y()?);
        self.element
            .class_list()
            .toggle_with_force(HIDDEN_CLASS, visibility == Visibility::Hidden)?;
        Ok(())
    }
}
