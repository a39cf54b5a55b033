//! Provider replies and the messages shown for them.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::error::SubscribeError;

const FALLBACK_MESSAGE: &str = "Subscription failed. Please try again.";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag regex should compile"));

/// Leading error code the provider prefixes some messages with, e.g. `"0 - "`.
static CODE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*-\s*").expect("code prefix regex should compile"));

/// Payload passed to the JSONP callback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubscribeResponse {
    pub result: String,
    #[serde(default)]
    pub msg: Option<String>,
}

impl SubscribeResponse {
    /// Parse the JSON text of a reply.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the reply lacks a `result` string.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// `Ok` for a successful signup, otherwise the message to show.
    ///
    /// # Errors
    ///
    /// [`SubscribeError::Rejected`] carrying a reader-facing message.
    pub fn outcome(&self) -> Result<(), SubscribeError> {
        if self.result == "success" {
            Ok(())
        } else {
            Err(SubscribeError::Rejected(friendly_message(self.msg.as_deref())))
        }
    }
}

/// Strip markup and the leading error code from a provider message.
#[must_use]
pub fn clean_message(raw: &str) -> String {
    let without_tags = TAG_RE.replace_all(raw, "");
    CODE_PREFIX_RE.replace(without_tags.trim(), "").trim().to_owned()
}

/// Map a provider message to the copy shown under the signup field.
#[must_use]
pub fn friendly_message(raw: Option<&str>) -> String {
    let cleaned = clean_message(raw.unwrap_or(FALLBACK_MESSAGE));
    let lower = cleaned.to_lowercase();
    if lower.contains("already subscribed") {
        "This email is already subscribed.".to_owned()
    } else if lower.contains("invalid") || lower.contains("looks fake") {
        "Please enter a valid email address.".to_owned()
    } else if lower.contains("too many") {
        "Too many attempts. Please try again later.".to_owned()
    } else if cleaned.is_empty() {
        FALLBACK_MESSAGE.to_owned()
    } else {
        cleaned
    }
}
