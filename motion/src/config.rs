//! Runtime-tunable motion parameters.
//!
//! Defaults come from [`crate::consts`]. A page can override any subset by
//! putting a JSON object in the `data-motion` attribute of `<body>`; keys use
//! camelCase (`{"expandPhaseEnd": 0.7, "mobileBreakpointPx": 1023}`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    EXPAND_PHASE_END, HEADER_HIDE_THRESHOLD_PX, HERO_ASPECT_HEIGHT, HERO_ASPECT_WIDTH, INITIAL_WIDTH_FRACTION,
    MAX_HERO_WIDTH_PX, MIN_HERO_WIDTH_PX, MOBILE_BREAKPOINT_PX, NORMAL_HEIGHT_CAP, SHORT_MAX_HERO_WIDTH_PX,
    SHORT_VIEWPORT_MAX_HEIGHT_PX, SHORT_VIEWPORT_NUDGE_PX, START_RADIUS_PX, SUBPAGE_HEADER_THRESHOLD_PX,
    TALL_HEIGHT_CAP, TALL_VIEWPORT_MIN_HEIGHT_PX, TIMELINE_ACTIVE_BOTTOM_LINE, TIMELINE_ACTIVE_TOP_LINE,
    TIMELINE_REVEAL_LINE,
};

/// All tuning knobs for the scroll controllers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionConfig {
    pub aspect_width: f64,
    pub aspect_height: f64,
    pub initial_width_fraction: f64,
    pub min_hero_width_px: f64,
    pub max_hero_width_px: f64,
    pub short_max_hero_width_px: f64,
    pub short_viewport_max_height_px: f64,
    pub short_viewport_nudge_px: f64,
    pub tall_viewport_min_height_px: f64,
    pub tall_height_cap: f64,
    pub normal_height_cap: f64,
    pub start_radius_px: f64,
    pub expand_phase_end: f64,
    pub mobile_breakpoint_px: f64,
    pub header_hide_threshold_px: f64,
    pub subpage_header_threshold_px: f64,
    pub timeline_reveal_line: f64,
    pub timeline_active_top_line: f64,
    pub timeline_active_bottom_line: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            aspect_width: HERO_ASPECT_WIDTH,
            aspect_height: HERO_ASPECT_HEIGHT,
            initial_width_fraction: INITIAL_WIDTH_FRACTION,
            min_hero_width_px: MIN_HERO_WIDTH_PX,
            max_hero_width_px: MAX_HERO_WIDTH_PX,
            short_max_hero_width_px: SHORT_MAX_HERO_WIDTH_PX,
            short_viewport_max_height_px: SHORT_VIEWPORT_MAX_HEIGHT_PX,
            short_viewport_nudge_px: SHORT_VIEWPORT_NUDGE_PX,
            tall_viewport_min_height_px: TALL_VIEWPORT_MIN_HEIGHT_PX,
            tall_height_cap: TALL_HEIGHT_CAP,
            normal_height_cap: NORMAL_HEIGHT_CAP,
            start_radius_px: START_RADIUS_PX,
            expand_phase_end: EXPAND_PHASE_END,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            header_hide_threshold_px: HEADER_HIDE_THRESHOLD_PX,
            subpage_header_threshold_px: SUBPAGE_HEADER_THRESHOLD_PX,
            timeline_reveal_line: TIMELINE_REVEAL_LINE,
            timeline_active_top_line: TIMELINE_ACTIVE_TOP_LINE,
            timeline_active_bottom_line: TIMELINE_ACTIVE_BOTTOM_LINE,
        }
    }
}

impl MotionConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a JSON object with
    /// numeric fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(raw).map(Self::validated)
    }

    /// Replace out-of-range values with their defaults.
    ///
    /// The expand phase end and every viewport fraction must lie in `(0, 1]`;
    /// the aspect sides must be positive; pixel sizes and thresholds must be
    /// non-negative. Non-finite values never pass.
    #[must_use]
    pub fn validated(self) -> Self {
        let defaults = Self::default();
        Self {
            aspect_width: positive(self.aspect_width, defaults.aspect_width),
            aspect_height: positive(self.aspect_height, defaults.aspect_height),
            initial_width_fraction: fraction(self.initial_width_fraction, defaults.initial_width_fraction),
            min_hero_width_px: non_negative(self.min_hero_width_px, defaults.min_hero_width_px),
            max_hero_width_px: positive(self.max_hero_width_px, defaults.max_hero_width_px),
            short_max_hero_width_px: positive(self.short_max_hero_width_px, defaults.short_max_hero_width_px),
            short_viewport_max_height_px: non_negative(
                self.short_viewport_max_height_px,
                defaults.short_viewport_max_height_px,
            ),
            short_viewport_nudge_px: finite(self.short_viewport_nudge_px, defaults.short_viewport_nudge_px),
            tall_viewport_min_height_px: non_negative(
                self.tall_viewport_min_height_px,
                defaults.tall_viewport_min_height_px,
            ),
            tall_height_cap: fraction(self.tall_height_cap, defaults.tall_height_cap),
            normal_height_cap: fraction(self.normal_height_cap, defaults.normal_height_cap),
            start_radius_px: non_negative(self.start_radius_px, defaults.start_radius_px),
            expand_phase_end: fraction(self.expand_phase_end, defaults.expand_phase_end),
            mobile_breakpoint_px: non_negative(self.mobile_breakpoint_px, defaults.mobile_breakpoint_px),
            header_hide_threshold_px: non_negative(self.header_hide_threshold_px, defaults.header_hide_threshold_px),
            subpage_header_threshold_px: non_negative(
                self.subpage_header_threshold_px,
                defaults.subpage_header_threshold_px,
            ),
            timeline_reveal_line: fraction(self.timeline_reveal_line, defaults.timeline_reveal_line),
            timeline_active_top_line: fraction(self.timeline_active_top_line, defaults.timeline_active_top_line),
            timeline_active_bottom_line: fraction(
                self.timeline_active_bottom_line,
                defaults.timeline_active_bottom_line,
            ),
        }
    }

    /// Width divided by height of the hero artwork.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_width / self.aspect_height
    }
}

fn finite(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}

fn positive(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { fallback }
}

fn non_negative(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= 0.0 { value } else { fallback }
}

fn fraction(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 && value <= 1.0 { value } else { fallback }
}
