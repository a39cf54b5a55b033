//! Animation-frame scheduling with one pending request per subsystem.
//!
//! Scroll events can fire many times per display refresh. Each animated
//! subsystem owns a [`FrameGate`], which allows at most one outstanding
//! `requestAnimationFrame` at a time, so every frame performs at most one
//! layout read/write pair per subsystem.
//!
//! The gate is a pure state machine; [`AnimationFrame`] binds it to the
//! browser's `requestAnimationFrame` / `cancelAnimationFrame`.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// What to do with a request that arrives while a frame is already pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePolicy {
    /// Keep the pending frame and drop the new request.
    Coalesce,
    /// Cancel the pending frame and schedule a fresh one.
    Restart,
}

/// Instruction returned by [`FrameGate::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// No frame is pending; schedule one.
    Schedule,
    /// A frame is pending and will serve this request.
    Skip,
    /// Cancel the pending frame `cancel`, then schedule a new one.
    Reschedule { cancel: i32 },
}

/// Single-slot bookkeeping of an in-flight animation frame.
#[derive(Debug, Clone)]
pub struct FrameGate {
    policy: FramePolicy,
    pending: Option<i32>,
}

impl FrameGate {
    #[must_use]
    pub fn new(policy: FramePolicy) -> Self {
        Self { policy, pending: None }
    }

    #[must_use]
    pub fn policy(&self) -> FramePolicy {
        self.policy
    }

    /// Handle of the frame currently in flight, if any.
    #[must_use]
    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    /// Register interest in a frame and learn how to satisfy it.
    ///
    /// A `Reschedule` answer releases the slot immediately; the caller must
    /// cancel the returned handle and report the replacement via
    /// [`FrameGate::scheduled`].
    pub fn request(&mut self) -> FrameRequest {
        match (self.pending, self.policy) {
            (None, _) => FrameRequest::Schedule,
            (Some(_), FramePolicy::Coalesce) => FrameRequest::Skip,
            (Some(cancel), FramePolicy::Restart) => {
                self.pending = None;
                FrameRequest::Reschedule { cancel }
            }
        }
    }

    /// Record the handle returned by `requestAnimationFrame`.
    pub fn scheduled(&mut self, handle: i32) {
        self.pending = Some(handle);
    }

    /// The pending frame ran; the slot is free again.
    pub fn fired(&mut self) {
        self.pending = None;
    }
}

/// A [`FrameGate`] bound to the browser's animation-frame scheduler.
///
/// The task runs inside the frame callback, which is the only place the
/// subsystem's state is mutated. Keep the value alive for as long as frames
/// may be requested: dropping it frees the callback.
pub struct AnimationFrame {
    window: Window,
    gate: Rc<RefCell<FrameGate>>,
    callback: Closure<dyn FnMut(f64)>,
}

impl AnimationFrame {
    /// Wrap `task` so it runs at most once per requested frame.
    pub fn new<F>(window: Window, policy: FramePolicy, mut task: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let gate = Rc::new(RefCell::new(FrameGate::new(policy)));
        let gate_for_cb = Rc::clone(&gate);
        let callback = Closure::wrap(Box::new(move |_ts: f64| {
            gate_for_cb.borrow_mut().fired();
            task();
        }) as Box<dyn FnMut(f64)>);
        Self { window, gate, callback }
    }

    /// Ask for the task to run on the next animation frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser rejects the schedule or cancel call.
    pub fn request(&self) -> Result<(), JsValue> {
        let next = self.gate.borrow_mut().request();
        match next {
            FrameRequest::Skip => Ok(()),
            FrameRequest::Schedule => self.schedule(),
            FrameRequest::Reschedule { cancel } => {
                self.window.cancel_animation_frame(cancel)?;
                self.schedule()
            }
        }
    }

    /// Whether a frame is currently in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.gate.borrow().pending().is_some()
    }

    fn schedule(&self) -> Result<(), JsValue> {
        let handle = self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())?;
        self.gate.borrow_mut().scheduled(handle);
        Ok(())
    }
}
