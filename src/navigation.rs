//! In-page section navigation.
//!
//! The header is fixed, so every programmatic scroll lands the target
//! [`HEADER_OFFSET_PX`] below the top of the viewport.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Clearance left above a section for the fixed header.
pub const HEADER_OFFSET_PX: f64 = 100.0;

/// Page the sub-page navigation links point back to.
pub const HOME_PAGE: &str = "index.html";

/// One header navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Element id of the home-page section.
    pub section: &'static str,
}

impl NavLink {
    /// Link target from a sub-page: the home page plus the section fragment.
    /// The home page itself uses [`scroll_to_section`] instead of links.
    #[must_use]
    pub fn href(self) -> String {
        format!("{HOME_PAGE}#{}", self.section)
    }
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Mission", section: "mission" },
    NavLink { label: "Cases", section: "cases" },
    NavLink { label: "Team", section: "team" },
];

/// Element id named by an in-page `href`, or `None` for `#` and non-fragment links.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document scroll position that puts an element whose viewport top is
/// `rect_top` just below the header, given the current scroll `page_y`.
#[must_use]
pub fn section_scroll_top(rect_top: f64, page_y: f64) -> f64 {
    rect_top + page_y - HEADER_OFFSET_PX
}

/// Smooth-scroll to the element with id `section`; a missing element is a no-op.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn scroll_to_section(section: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(target) = window.document().and_then(|doc| doc.get_element_by_id(section)) else {
            log::debug!("navigation: no section #{section}");
            return;
        };
        if let Err(err) = scroll_to_element(&window, &target) {
            log::warn!("navigation: scroll to #{section} failed: {err:?}");
        }
    }
}

#[cfg(feature = "csr")]
fn scroll_to_element(window: &web_sys::Window, target: &web_sys::Element) -> Result<(), wasm_bindgen::JsValue> {
    let top = section_scroll_top(target.get_bounding_client_rect().top(), window.scroll_y()?);
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Route clicks on `a[href^="#"]` through the offset scroll.
///
/// A single delegated listener on the document, so links rendered after boot
/// are covered too. Links whose target does not exist keep their default
/// behavior.
#[cfg(feature = "csr")]
pub fn intercept_anchor_links(document: &web_sys::Document) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let handler = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").unwrap_or(None))
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let Some(id) = anchor_target(&href) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(target) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
            return;
        };
        ev.prevent_default();
        if let Err(err) = scroll_to_element(&window, &target) {
            log::warn!("navigation: anchor scroll to #{id} failed: {err:?}");
        }
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
    document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
