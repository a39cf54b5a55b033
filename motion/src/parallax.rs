//! Hero "zoom to fullscreen" parallax controller.
//!
//! As the reader scrolls through the tall `.hero-container`, the hero image
//! wrapper grows from its initial centred box into a box that covers the
//! whole viewport, its corners square off, and the hero titles fade out.
//!
//! PHASES
//! ======
//! Progress is split at `expand_phase_end` (0.8 by default):
//!
//! - growth: progress is re-normalized to `[0, 1]`, eased with a cubic
//!   ease-out, and used to interpolate size, offset, and corner radius;
//! - hold: past the phase end the hero stays fully expanded with square
//!   corners, so the effect completes before the container scrolls away.
//!
//! The titles fade with a quadratic ease-in over the same growth phase.
//!
//! On viewports at or below the mobile breakpoint the controller produces no
//! frames at all and the page keeps its static stylesheet layout.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use crate::config::MotionConfig;
use crate::dom::{clear_styles, query_all_html, query_html, read_viewport, set_px};
use crate::easing::{ease_in_quad, ease_out_cubic, lerp};
use crate::geometry::{Size, Viewport, centered_offset, cover_size, initial_hero_size};
use crate::progress::{phase_progress, scroll_progress};

/// Selector of the tall scroll container driving the effect.
pub const CONTAINER_SELECTOR: &str = ".hero-container";

/// Selector of the element that is resized and repositioned.
pub const WRAPPER_SELECTOR: &str = "#hero-image-wrapper";

/// Selector of the heading elements that fade out.
pub const TITLE_SELECTOR: &str = "[data-hero-title]";

/// Inline properties written to the wrapper, cleared again for static layout.
const WRAPPER_PROPERTIES: [&str; 5] = ["width", "height", "left", "top", "border-radius"];

/// Visual state of the hero for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub width: f64,
    pub height: f64,
    /// Left edge of the wrapper relative to the viewport.
    pub left: f64,
    /// Top edge of the wrapper relative to the viewport.
    pub top: f64,
    pub radius: f64,
    pub title_opacity: f64,
}

/// Result of feeding a new viewport to [`ParallaxCore::resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutChange {
    /// Same viewport as before; the cached initial size is still valid.
    Unchanged,
    /// New viewport, still animated; the initial size will be recomputed.
    Resized,
    /// Crossed into the mobile breakpoint; inline styles must be cleared.
    EnteredStatic,
    /// Crossed out of the mobile breakpoint; animation resumes.
    EnteredAnimated,
}

/// Parallax state, independent of the DOM.
#[derive(Debug, Clone)]
pub struct ParallaxCore {
    config: MotionConfig,
    viewport: Viewport,
    initial: Option<Size>,
}

impl ParallaxCore {
    #[must_use]
    pub fn new(config: MotionConfig, viewport: Viewport) -> Self {
        Self { config, viewport, initial: None }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the effect runs at the current viewport size.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.viewport.is_mobile(&self.config)
    }

    /// Adopt a new viewport, invalidating the cached initial size when it differs.
    pub fn resize(&mut self, viewport: Viewport) -> LayoutChange {
        if viewport == self.viewport {
            return LayoutChange::Unchanged;
        }
        let was_enabled = self.is_enabled();
        self.viewport = viewport;
        self.initial = None;
        match (was_enabled, self.is_enabled()) {
            (true, false) => LayoutChange::EnteredStatic,
            (false, true) => LayoutChange::EnteredAnimated,
            _ => LayoutChange::Resized,
        }
    }

    /// Starting hero size for the current viewport, computed once per viewport.
    pub fn initial_size(&mut self) -> Size {
        let viewport = self.viewport;
        let config = &self.config;
        *self.initial.get_or_insert_with(|| initial_hero_size(viewport, config))
    }

    /// Full-cover hero size for the current viewport.
    #[must_use]
    pub fn cover_size(&self) -> Size {
        cover_size(self.viewport, &self.config)
    }

    /// Frame for a container whose top edge sits at `container_top` (relative
    /// to the viewport) and whose height is `container_height`.
    ///
    /// Returns `None` while the effect is disabled.
    pub fn frame(&mut self, container_top: f64, container_height: f64) -> Option<HeroFrame> {
        let progress = scroll_progress(container_top, container_height, self.viewport.height);
        self.frame_at(progress)
    }

    /// Frame for an explicit progress value; out-of-range progress is clamped.
    ///
    /// Returns `None` while the effect is disabled.
    pub fn frame_at(&mut self, progress: f64) -> Option<HeroFrame> {
        if !self.is_enabled() {
            return None;
        }

        let phase_end = self.config.expand_phase_end;
        let initial = self.initial_size();
        let cover = self.cover_size();

        let (start_left, mut start_top) = centered_offset(initial, self.viewport);
        if self.viewport.is_short(&self.config) {
            start_top += self.config.short_viewport_nudge_px;
        }
        let (end_left, end_top) = centered_offset(cover, self.viewport);

        let phase = phase_progress(progress, phase_end);
        let eased = ease_out_cubic(phase);

        Some(HeroFrame {
            width: lerp(initial.width, cover.width, eased),
            height: lerp(initial.height, cover.height, eased),
            left: lerp(start_left, end_left, eased),
            top: lerp(start_top, end_top, eased),
            radius: lerp(self.config.start_radius_px, 0.0, eased),
            title_opacity: (1.0 - ease_in_quad(phase)).clamp(0.0, 1.0),
        })
    }
}

/// DOM anchors the parallax effect writes to.
struct Anchors {
    container: HtmlElement,
    wrapper: HtmlElement,
    titles: Vec<HtmlElement>,
}

/// Parallax controller bound to the hero elements.
pub struct Parallax {
    anchors: Anchors,
    core: ParallaxCore,
    last_applied: Option<HeroFrame>,
}

impl Parallax {
    /// Resolve the hero anchors and build the controller.
    ///
    /// Returns `Ok(None)` when the container or wrapper is missing; titles are
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a selector query or the viewport read fails.
    pub fn attach(document: &Document, window: &Window, config: MotionConfig) -> Result<Option<Self>, JsValue> {
        let Some(container) = query_html(document, CONTAINER_SELECTOR)? else {
            return Ok(None);
        };
        let Some(wrapper) = query_html(document, WRAPPER_SELECTOR)? else {
            return Ok(None);
        };
        let titles = query_all_html(document, TITLE_SELECTOR)?;
        let core = ParallaxCore::new(config, read_viewport(window)?);
        Ok(Some(Self { anchors: Anchors { container, wrapper, titles }, core, last_applied: None }))
    }

    #[must_use]
    pub fn core(&self) -> &ParallaxCore {
        &self.core
    }

    /// Read geometry and apply one frame.
    ///
    /// Nothing is written while the effect is disabled, except once on the
    /// transition into the static layout, when the inline styles are removed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a geometry read or style write fails.
    pub fn update(&mut self, window: &Window) -> Result<(), JsValue> {
        if self.core.resize(read_viewport(window)?) == LayoutChange::EnteredStatic {
            return self.clear();
        }

        let rect = self.anchors.container.get_bounding_client_rect();
        let height = f64::from(self.anchors.container.offset_height());
        let Some(frame) = self.core.frame(rect.top(), height) else {
            return Ok(());
        };
        if self.last_applied == Some(frame) {
            return Ok(());
        }
        self.apply(&frame)?;
        self.last_applied = Some(frame);
        Ok(())
    }

    fn apply(&self, frame: &HeroFrame) -> Result<(), JsValue> {
        let wrapper = &self.anchors.wrapper;
        set_px(wrapper, "width", frame.width)?;
        set_px(wrapper, "height", frame.height)?;
        set_px(wrapper, "left", frame.left)?;
        set_px(wrapper, "top", frame.top)?;
        set_px(wrapper, "border-radius", frame.radius)?;
        let opacity = format!("{:.3}", frame.title_opacity);
        for title in &self.anchors.titles {
            title.style().set_property("opacity", &opacity)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), JsValue> {
        self.last_applied = None;
        clear_styles(&self.anchors.wrapper, &WRAPPER_PROPERTIES)?;
        for title in &self.anchors.titles {
            clear_styles(title, &["opacity"])?;
        }
        Ok(())
    }
}
