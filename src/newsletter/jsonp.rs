//! Script-injection transport for the signup request (browser only).
//!
//! LIFECYCLE
//! =========
//! 1. Register `window[<callback>]` and append `<script src=<url>>` to the body.
//! 2. Wait for whichever comes first: the callback, the script's `onerror`, or
//!    the reply timeout.
//! 3. Remove the global and the script in every case, then map the reply.
//!
//! A reply arriving after the timeout finds no global and is dropped by the
//! browser; the reader has already been told to try again.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{Either, select};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlScriptElement, Window};

use super::REPLY_TIMEOUT_MS;
use super::error::SubscribeError;
use super::request::SubscribeRequest;
use super::response::{SubscribeResponse, friendly_message};

enum Reply {
    Payload(JsValue),
    LoadFailed,
}

type ReplySlot = Rc<RefCell<Option<oneshot::Sender<Reply>>>>;

fn deliver(slot: &ReplySlot, reply: Reply) {
    let Some(tx) = slot.borrow_mut().take() else {
        return;
    };
    if tx.send(reply).is_err() {
        log::debug!("newsletter: reply arrived after the wait ended");
    }
}

/// Send one signup request and wait for the provider's verdict.
///
/// # Errors
///
/// - [`SubscribeError::Unavailable`] when the page has no window, document,
///   or body to inject into;
/// - [`SubscribeError::Connection`] when the script fails to load or no reply
///   arrives within [`REPLY_TIMEOUT_MS`];
/// - [`SubscribeError::Rejected`] when the provider refuses the address.
pub async fn subscribe(request: &SubscribeRequest) -> Result<(), SubscribeError> {
    let window = web_sys::window().ok_or(SubscribeError::Unavailable)?;
    let document = window.document().ok_or(SubscribeError::Unavailable)?;

    let (tx, rx) = oneshot::channel();
    let slot: ReplySlot = Rc::new(RefCell::new(Some(tx)));

    let on_reply = {
        let slot = Rc::clone(&slot);
        Closure::wrap(Box::new(move |payload: JsValue| deliver(&slot, Reply::Payload(payload))) as Box<dyn FnMut(JsValue)>)
    };
    let on_error = {
        let slot = Rc::clone(&slot);
        Closure::wrap(Box::new(move |_: web_sys::Event| deliver(&slot, Reply::LoadFailed)) as Box<dyn FnMut(web_sys::Event)>)
    };

    let script = match inject(&window, &document, request, &on_reply, &on_error) {
        Ok(script) => script,
        Err(err) => {
            log::warn!("newsletter: request injection failed: {err:?}");
            remove_callback(&window, &request.callback);
            return Err(SubscribeError::Unavailable);
        }
    };

    let timeout = gloo_timers::future::sleep(Duration::from_millis(u64::from(REPLY_TIMEOUT_MS)));
    let reply = match select(rx, Box::pin(timeout)).await {
        Either::Left((Ok(reply), _)) => Some(reply),
        Either::Left((Err(_), _)) | Either::Right(_) => None,
    };

    remove_callback(&window, &request.callback);
    script.remove();

    match reply {
        Some(Reply::Payload(payload)) => parse(&payload)?.outcome(),
        Some(Reply::LoadFailed) => Err(SubscribeError::Connection),
        None => {
            log::warn!("newsletter: no reply within {REPLY_TIMEOUT_MS} ms");
            Err(SubscribeError::Connection)
        }
    }
}

fn inject(
    window: &Window,
    document: &Document,
    request: &SubscribeRequest,
    on_reply: &Closure<dyn FnMut(JsValue)>,
    on_error: &Closure<dyn FnMut(web_sys::Event)>,
) -> Result<HtmlScriptElement, JsValue> {
    let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
    let script: HtmlScriptElement = document.create_element("script")?.dyn_into().map_err(JsValue::from)?;
    js_sys::Reflect::set(window, &JsValue::from_str(&request.callback), on_reply.as_ref())?;
    script.set_src(&request.url());
    script.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    body.append_child(&script)?;
    Ok(script)
}

fn remove_callback(window: &Window, callback: &str) {
    if let Err(err) = js_sys::Reflect::delete_property(window, &JsValue::from_str(callback)) {
        log::warn!("newsletter: could not remove {callback}: {err:?}");
    }
}

fn parse(payload: &JsValue) -> Result<SubscribeResponse, SubscribeError> {
    let text: String = js_sys::JSON::stringify(payload)
        .map(String::from)
        .map_err(|err| {
            log::warn!("newsletter: unreadable reply: {err:?}");
            SubscribeError::Rejected(friendly_message(None))
        })?;
    SubscribeResponse::from_json(&text).map_err(|err| {
        log::warn!("newsletter: malformed reply {text}: {err}");
        SubscribeError::Rejected(friendly_message(None))
    })
}
