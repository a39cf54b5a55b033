//! Small `web-sys` helpers shared by the controller wrappers.
//!
//! This module and the controller wrappers are the only places that touch the
//! DOM. All fallible calls propagate `JsValue` errors to the host.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::geometry::Viewport;

/// Current `innerWidth` / `innerHeight` of the window.
///
/// # Errors
///
/// Returns `Err` if the browser refuses the read or reports a non-number.
pub fn read_viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok(Viewport::new(width, height))
}

/// First element matching `selector`, if it is an HTML element.
///
/// # Errors
///
/// Returns `Err` for an invalid selector.
pub fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned()))
}

/// Every HTML element matching `selector`, in document order.
///
/// # Errors
///
/// Returns `Err` for an invalid selector.
pub fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::new();
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Some(el) = node.dyn_ref::<HtmlElement>()
        {
            out.push(el.clone());
        }
    }
    Ok(out)
}

/// Set an inline style property to a pixel length.
///
/// # Errors
///
/// Returns `Err` if the style declaration rejects the write.
pub fn set_px(el: &HtmlElement, property: &str, value: f64) -> Result<(), JsValue> {
    el.style().set_property(property, &format!("{value:.2}px"))
}

/// Remove inline style properties, restoring the stylesheet values.
///
/// # Errors
///
/// Returns `Err` if the style declaration rejects the removal.
pub fn clear_styles(el: &HtmlElement, properties: &[&str]) -> Result<(), JsValue> {
    let style = el.style();
    for property in properties {
        style.remove_property(property)?;
    }
    Ok(())
}
