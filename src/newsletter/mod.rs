//! Newsletter signup: validation, request building, and provider replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! The mailing-list provider only accepts cross-origin signups through a
//! JSONP endpoint: the browser loads a `<script>` whose URL carries the
//! subscriber and the name of a global callback, and the provider's reply
//! invokes that callback with `{ result, msg }`. The call is one-shot; any
//! failure is shown inline and the reader may submit again by hand.
//!
//! Everything except the script injection itself ([`jsonp`], browser only) is
//! plain Rust and tested natively.

pub mod email;
pub mod error;
#[cfg(feature = "csr")]
pub mod jsonp;
pub mod request;
pub mod response;

pub use email::validate_email;
pub use error::{EmailError, SubscribeError};
pub use request::{SubscribeRequest, utm_source};
pub use response::SubscribeResponse;

/// JSONP signup endpoint of the mailing-list provider.
pub const SUBSCRIBE_ENDPOINT: &str = "https://onthedocket.us5.list-manage.com/subscribe/post-json?u=8c75b0cc8cae0cf3c07c96b5c&id=ad82bba080&f_id=00948be0f0";

/// How long the success message stays on screen.
pub const SUCCESS_VISIBLE_MS: u32 = 5_000;

/// Give up on a reply that never arrives after this long.
pub const REPLY_TIMEOUT_MS: u32 = 15_000;
