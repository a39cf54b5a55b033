//! Client-side UI state that is independent of the DOM.

pub mod newsletter;
