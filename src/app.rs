//! Browser boot sequence.
//!
//! ARCHITECTURE
//! ============
//! 1. Wait for the DOM (`DOMContentLoaded`, unless it already fired).
//! 2. Read [`PageSettings`] from `<body>` and mount the fragments.
//! 3. Attach each motion controller whose anchors exist. Each one is owned
//!    by its frame task and driven through an [`AnimationFrame`] gate: the
//!    header coalesces scroll bursts; parallax and timeline restart so the
//!    frame that runs always sees the latest geometry.
//! 4. Register one passive `scroll` and one passive `resize` listener that
//!    only request frames.
//!
//! Every failure after boot is logged and the page keeps running.

use std::rc::Rc;

use motion::config::MotionConfig;
use motion::header::Header;
use motion::parallax::Parallax;
use motion::schedule::{AnimationFrame, FramePolicy};
use motion::timeline::Timeline;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Window};

use crate::components::mount_fragments;
use crate::navigation::intercept_anchor_links;
use crate::page::{PageSettings, is_document_parsed};

/// A controller's frame gate, labelled for logs.
struct Driven {
    name: &'static str,
    frame: AnimationFrame,
}

impl Driven {
    fn request(&self) {
        if let Err(err) = self.frame.request() {
            log::warn!("{}: frame request failed: {err:?}", self.name);
        }
    }
}

/// Frame gates to poke per window event.
#[derive(Default)]
struct Listeners {
    scroll: Vec<Rc<Driven>>,
    resize: Vec<Rc<Driven>>,
}

/// Run [`init`] once the document has been parsed.
pub fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if is_document_parsed(&document.ready_state()) {
        init(&window, &document);
        return;
    }
    let target = document.clone();
    let on_ready = Closure::once_into_js(move || init(&window, &document));
    if let Err(err) = target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::warn!("boot: cannot wait for DOMContentLoaded: {err:?}");
    }
}

fn init(window: &Window, document: &Document) {
    let page = PageSettings::read(document);
    log::debug!("boot: {:?} page", page.kind);
    mount_fragments(document, page.kind);

    let listeners = attach_motion(window, document, &page.motion);
    listen(window, "scroll", listeners.scroll);
    listen(window, "resize", listeners.resize);

    if let Err(err) = intercept_anchor_links(document) {
        log::warn!("boot: anchor links not intercepted: {err:?}");
    }
}

fn attach_motion(window: &Window, document: &Document, config: &MotionConfig) -> Listeners {
    let mut listeners = Listeners::default();

    match Header::attach(document, config) {
        Some(header) => {
            let driven = drive(window, "header", FramePolicy::Coalesce, header, Header::update);
            listeners.scroll.push(driven);
        }
        None => log::debug!("header: no #header, visibility controller off"),
    }

    match Parallax::attach(document, window, config.clone()) {
        Ok(Some(parallax)) => {
            let driven = drive(window, "parallax", FramePolicy::Restart, parallax, Parallax::update);
            driven.request();
            listeners.scroll.push(Rc::clone(&driven));
            listeners.resize.push(driven);
        }
        Ok(None) => log::debug!("parallax: hero anchors missing, effect off"),
        Err(err) => log::warn!("parallax: attach failed: {err:?}"),
    }

    match Timeline::attach(document, config) {
        Ok(Some(timeline)) => {
            let driven = drive(window, "timeline", FramePolicy::Restart, timeline, Timeline::update);
            driven.request();
            listeners.scroll.push(Rc::clone(&driven));
            listeners.resize.push(driven);
        }
        Ok(None) => log::debug!("timeline: no steps, revealer off"),
        Err(err) => log::warn!("timeline: attach failed: {err:?}"),
    }

    listeners
}

/// Move `controller` into a frame task that applies `update` once per frame.
fn drive<C: 'static>(
    window: &Window,
    name: &'static str,
    policy: FramePolicy,
    mut controller: C,
    update: fn(&mut C, &Window) -> Result<(), JsValue>,
) -> Rc<Driven> {
    let frame_window = window.clone();
    let frame = AnimationFrame::new(window.clone(), policy, move || {
        if let Err(err) = update(&mut controller, &frame_window) {
            log::warn!("{name}: frame failed: {err:?}");
        }
    });
    Rc::new(Driven { name, frame })
}

fn listen(window: &Window, event: &str, targets: Vec<Rc<Driven>>) {
    if targets.is_empty() {
        return;
    }
    let handler = Closure::wrap(Box::new(move || {
        for driven in &targets {
            driven.request();
        }
    }) as Box<dyn FnMut()>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        handler.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("boot: {event} listener not registered: {err:?}");
        return;
    }
    handler.forget();
}
