//! OnTheDocket site runtime.
//!
//! Compiled to WebAssembly with the `csr` feature and loaded by every static
//! page of the site. Without `csr` the crate builds natively so the pure
//! parts (newsletter handling, navigation math, form state, page settings)
//! are tested with plain `cargo test`.
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`app`] | Boot sequence and scroll/resize wiring (browser only) |
//! | [`components`] | Header, newsletter and footer fragments |
//! | [`navigation`] | Offset scrolling to page sections |
//! | [`newsletter`] | Signup validation, request, and reply handling |
//! | [`page`] | Per-page settings from `<body>` attributes |
//! | [`state`] | DOM-independent UI state |
//!
//! Scroll math and the DOM controllers live in the `motion` crate.

#[cfg(feature = "csr")]
pub mod app;
pub mod components;
pub mod navigation;
pub mod newsletter;
pub mod page;
pub mod state;

/// WASM entry point: logging, panic hook, then boot.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    app::boot();
}
