//! Timeline step reveal and active-dot tracking.
//!
//! Steps fade in once they rise into the lower part of the viewport and stay
//! revealed. The step crossing the middle band of the viewport is "active",
//! and its matching dot is highlighted.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use crate::config::MotionConfig;
use crate::dom::{query_all_html, read_viewport};

pub const STEP_SELECTOR: &str = ".timeline-step";
pub const DOT_SELECTOR: &str = ".timeline-dot";
pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_CLASS: &str = "active";

/// Vertical extent of a step relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepBounds {
    pub top: f64,
    pub bottom: f64,
}

impl StepBounds {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// What changed in one observation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineChange {
    /// Steps revealed for the first time, in index order.
    pub revealed: Vec<usize>,
    /// New active step, present on the first observation and whenever it
    /// differs from the previous one.
    pub active: Option<Option<usize>>,
}

impl TimelineChange {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty() && self.active.is_none()
    }
}

/// Reveal/active state, independent of the DOM.
#[derive(Debug, Clone)]
pub struct TimelineCore {
    reveal_line: f64,
    active_top_line: f64,
    active_bottom_line: f64,
    revealed: Vec<bool>,
    active: Option<usize>,
    observed: bool,
}

impl TimelineCore {
    #[must_use]
    pub fn new(step_count: usize, config: &MotionConfig) -> Self {
        Self {
            reveal_line: config.timeline_reveal_line,
            active_top_line: config.timeline_active_top_line,
            active_bottom_line: config.timeline_active_bottom_line,
            revealed: vec![false; step_count],
            active: None,
            observed: false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Feed fresh step bounds and get the changes to apply.
    ///
    /// Bounds beyond the known step count are ignored. When several steps sit
    /// in the active band, the last one wins.
    pub fn observe(&mut self, bounds: &[StepBounds], viewport_height: f64) -> TimelineChange {
        let reveal_at = viewport_height * self.reveal_line;
        let active_top = viewport_height * self.active_top_line;
        let active_bottom = viewport_height * self.active_bottom_line;

        let mut change = TimelineChange::default();
        let mut active = None;
        for (index, (step, revealed)) in bounds.iter().zip(self.revealed.iter_mut()).enumerate() {
            if !*revealed && step.top < reveal_at {
                *revealed = true;
                change.revealed.push(index);
            }
            if step.top < active_top && step.bottom > active_bottom {
                active = Some(index);
            }
        }

        if !self.observed || active != self.active {
            self.observed = true;
            self.active = active;
            change.active = Some(active);
        }
        change
    }
}

/// Timeline controller bound to the step and dot elements.
pub struct Timeline {
    steps: Vec<HtmlElement>,
    dots: Vec<HtmlElement>,
    core: TimelineCore,
}

impl Timeline {
    /// Resolve the steps and dots and build the controller.
    ///
    /// Returns `Ok(None)` when the page has no timeline steps.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a selector query fails.
    pub fn attach(document: &Document, config: &MotionConfig) -> Result<Option<Self>, JsValue> {
        let steps = query_all_html(document, STEP_SELECTOR)?;
        if steps.is_empty() {
            return Ok(None);
        }
        let dots = query_all_html(document, DOT_SELECTOR)?;
        let core = TimelineCore::new(steps.len(), config);
        Ok(Some(Self { steps, dots, core }))
    }

    #[must_use]
    pub fn core(&self) -> &TimelineCore {
        &self.core
    }

    /// Measure every step and apply reveal/active classes that changed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the viewport read or a class write fails.
    pub fn update(&mut self, window: &Window) -> Result<(), JsValue> {
        let viewport = read_viewport(window)?;
        let bounds = self
            .steps
            .iter()
            .map(|step| {
                let rect = step.get_bounding_client_rect();
                StepBounds::new(rect.top(), rect.bottom())
            })
            .collect::<Vec<_>>();

        let change = self.core.observe(&bounds, viewport.height);
        for index in change.revealed {
            if let Some(step) = self.steps.get(index) {
                step.class_list().add_1(VISIBLE_CLASS)?;
            }
        }
        if let Some(active) = change.active {
            for (index, dot) in self.dots.iter().enumerate() {
                dot.class_list().toggle_with_force(ACTIVE_CLASS, Some(index) == active)?;
            }
        }
        Ok(())
    }
}
