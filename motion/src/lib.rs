//! Scroll-driven motion engine for the OnTheDocket site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! math behind every scroll effect on the page: turning raw scroll and
//! viewport geometry into a normalized progress value, easing that progress
//! into hero box geometry and title opacity, deciding header visibility from
//! scroll direction, and tracking which timeline steps are on screen. The host
//! crate is responsible only for wiring DOM events to these controllers.
//!
//! Every controller is split in two: a `*Core` type holding the pure logic,
//! testable without a browser, and a thin wrapper that resolves its DOM
//! anchors once and writes transient style properties.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`parallax`] | Hero "zoom to fullscreen" controller and [`parallax::ParallaxCore`] |
//! | [`header`] | Fixed header hide/reveal controller |
//! | [`timeline`] | Timeline step reveal and active-dot tracking |
//! | [`schedule`] | Single-slot animation-frame gate and its `requestAnimationFrame` binding |
//! | [`geometry`] | Viewport, hero initial size, and cover size |
//! | [`progress`] | Scroll progress through a container |
//! | [`easing`] | Easing curves and interpolation |
//! | [`dom`] | `web-sys` query and style helpers shared by the wrappers |
//! | [`config`] | Runtime-tunable [`config::MotionConfig`] |
//! | [`consts`] | Default numeric constants (breakpoints, thresholds, radii) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod easing;
pub mod geometry;
pub mod header;
pub mod parallax;
pub mod progress;
pub mod schedule;
pub mod timeline;
