//! Viewport and hero box geometry.
//!
//! The hero artwork keeps a fixed aspect ratio. It starts as a centred box
//! sized from the viewport ([`initial_hero_size`]) and grows into the
//! smallest box that still covers the whole viewport ([`cover_size`]).

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::config::MotionConfig;

/// Visible window size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether this viewport falls under the static mobile layout.
    #[must_use]
    pub fn is_mobile(&self, config: &MotionConfig) -> bool {
        self.width <= config.mobile_breakpoint_px
    }

    /// Whether this viewport is short enough to use the compact hero limits.
    #[must_use]
    pub fn is_short(&self, config: &MotionConfig) -> bool {
        self.height <= config.short_viewport_max_height_px
    }

    /// Whether this viewport is tall enough to use the tighter height cap.
    #[must_use]
    pub fn is_tall(&self, config: &MotionConfig) -> bool {
        self.height >= config.tall_viewport_min_height_px
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Build a size from a width and a width/height ratio.
    #[must_use]
    pub fn from_width(width: f64, aspect_ratio: f64) -> Self {
        Self { width, height: width / aspect_ratio }
    }
}

/// Starting size of the hero box for a viewport.
///
/// The width starts at a share of the viewport width, limited by the maximum
/// hero width (smaller on short viewports) and by a height cap that is a
/// share of the viewport height (tighter on very tall viewports). The result
/// is then raised to the minimum hero width, never past the viewport width.
#[must_use]
pub fn initial_hero_size(viewport: Viewport, config: &MotionConfig) -> Size {
    let ratio = config.aspect_ratio();
    let max_width = if viewport.is_short(config) {
        config.short_max_hero_width_px
    } else {
        config.max_hero_width_px
    };
    let mut width = (viewport.width * config.initial_width_fraction).min(max_width);

    let cap = if viewport.is_tall(config) { config.tall_height_cap } else { config.normal_height_cap };
    let max_height = viewport.height * cap;
    if width / ratio > max_height {
        width = max_height * ratio;
    }

    let floor = config.min_hero_width_px.min(viewport.width);
    Size::from_width(width.max(floor).max(0.0), ratio)
}

/// Smallest aspect-preserving box that covers the viewport without letterboxing.
#[must_use]
pub fn cover_size(viewport: Viewport, config: &MotionConfig) -> Size {
    let ratio = config.aspect_ratio();
    let width = viewport.width.max(viewport.height * ratio).max(0.0);
    Size::from_width(width, ratio)
}

/// Offset of a box's top-left corner that centres it in the viewport.
///
/// Boxes larger than the viewport get negative offsets so they overflow
/// evenly on both sides.
#[must_use]
pub fn centered_offset(size: Size, viewport: Viewport) -> (f64, f64) {
    ((viewport.width - size.width) / 2.0, (viewport.height - size.height) / 2.0)
}
