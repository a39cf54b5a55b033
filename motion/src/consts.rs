//! Default numeric constants for the motion crate.
//!
//! Every value here is a default for a field of
//! [`MotionConfig`](crate::config::MotionConfig); pages may override them.

// ── Hero image ──────────────────────────────────────────────────

/// Intrinsic width of the hero artwork; only the ratio to the height matters.
pub const HERO_ASPECT_WIDTH: f64 = 2238.0;

/// Intrinsic height of the hero artwork.
pub const HERO_ASPECT_HEIGHT: f64 = 1222.0;

/// Share of the viewport width the hero box starts at.
pub const INITIAL_WIDTH_FRACTION: f64 = 0.62;

/// Smallest starting hero width in CSS pixels (bounded by the viewport width).
pub const MIN_HERO_WIDTH_PX: f64 = 480.0;

/// Largest starting hero width in CSS pixels on normal-height viewports.
pub const MAX_HERO_WIDTH_PX: f64 = 1200.0;

/// Largest starting hero width in CSS pixels on short viewports.
pub const SHORT_MAX_HERO_WIDTH_PX: f64 = 1080.0;

/// Viewports at or below this height are "short".
pub const SHORT_VIEWPORT_MAX_HEIGHT_PX: f64 = 900.0;

/// Extra downward offset of the starting hero box on short viewports.
pub const SHORT_VIEWPORT_NUDGE_PX: f64 = 10.0;

/// Viewports at or above this height are "very tall".
pub const TALL_VIEWPORT_MIN_HEIGHT_PX: f64 = 1100.0;

/// Starting hero height cap, as a share of the viewport height, on very tall viewports.
pub const TALL_HEIGHT_CAP: f64 = 0.45;

/// Starting hero height cap, as a share of the viewport height, otherwise.
pub const NORMAL_HEIGHT_CAP: f64 = 0.55;

/// Corner radius of the hero box before it starts growing.
pub const START_RADIUS_PX: f64 = 8.0;

// ── Phases ──────────────────────────────────────────────────────

/// Progress at which the hero reaches full cover and the titles are gone.
pub const EXPAND_PHASE_END: f64 = 0.8;

/// Viewport widths at or below this run the static (non-animated) layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 767.0;

// ── Header ──────────────────────────────────────────────────────

/// Home page: the header only hides once the page is scrolled past this.
pub const HEADER_HIDE_THRESHOLD_PX: f64 = 100.0;

/// Sub-pages: the header always shows above this offset.
pub const SUBPAGE_HEADER_THRESHOLD_PX: f64 = 50.0;

// ── Timeline ────────────────────────────────────────────────────

/// A step is revealed once its top rises above this share of the viewport.
pub const TIMELINE_REVEAL_LINE: f64 = 0.8;

/// A step is active while its top is above this share of the viewport...
pub const TIMELINE_ACTIVE_TOP_LINE: f64 = 0.6;

/// ...and its bottom is below this share.
pub const TIMELINE_ACTIVE_BOTTOM_LINE: f64 = 0.4;
