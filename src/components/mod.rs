//! Shared page fragments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are static HTML with empty placeholder elements; at boot each
//! fragment is rendered into its placeholder so header, signup, and footer
//! markup lives in one place. The header must be mounted before the motion
//! controllers attach, since they look it up by id.

pub mod newsletter_section;
pub mod site_footer;
pub mod site_header;

pub use newsletter_section::NewsletterSection;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;

pub const HEADER_PLACEHOLDER: &str = "header-placeholder";
pub const NEWSLETTER_PLACEHOLDER: &str = "newsletter-placeholder";
pub const FOOTER_PLACEHOLDER: &str = "footer-placeholder";

/// Render every fragment whose placeholder exists on this page.
#[cfg(feature = "csr")]
pub fn mount_fragments(doc: &web_sys::Document, kind: crate::page::PageKind) {
    use leptos::prelude::*;

    let is_home = kind.is_home();
    if let Some(slot) = placeholder(doc, HEADER_PLACEHOLDER) {
        leptos::mount::mount_to(slot, move || view! { <SiteHeader is_home=is_home /> }).forget();
    }
    if let Some(slot) = placeholder(doc, NEWSLETTER_PLACEHOLDER) {
        leptos::mount::mount_to(slot, NewsletterSection).forget();
    }
    if let Some(slot) = placeholder(doc, FOOTER_PLACEHOLDER) {
        leptos::mount::mount_to(slot, SiteFooter).forget();
    }
}

#[cfg(feature = "csr")]
fn placeholder(doc: &web_sys::Document, id: &str) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let Some(element) = doc.get_element_by_id(id) else {
        log::debug!("components: no #{id} on this page");
        return None;
    };
    element.dyn_into().ok()
}
