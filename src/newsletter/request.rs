//! JSONP signup request construction.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use super::SUBSCRIBE_ENDPOINT;

/// Prefix of the global callback the provider's reply invokes.
pub const CALLBACK_PREFIX: &str = "mc_callback_";

/// One signup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeRequest {
    /// Already validated and trimmed.
    pub email: String,
    /// Campaign tag forwarded as the `SOURCE` merge field.
    pub source: Option<String>,
    /// Name of the global function the reply calls.
    pub callback: String,
}

impl SubscribeRequest {
    /// Build a request whose callback name is unique to `timestamp_ms`.
    #[must_use]
    pub fn new(email: String, source: Option<String>, timestamp_ms: u64) -> Self {
        Self { email, source, callback: format!("{CALLBACK_PREFIX}{timestamp_ms}") }
    }

    /// Script URL against the production endpoint.
    #[must_use]
    pub fn url(&self) -> String {
        self.url_for(SUBSCRIBE_ENDPOINT)
    }

    /// Script URL against `endpoint`, which already carries its own query.
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        let mut url = format!(
            "{endpoint}{separator}EMAIL={}&c={}",
            urlencoding::encode(&self.email),
            urlencoding::encode(&self.callback)
        );
        if let Some(source) = self.source.as_deref().filter(|s| !s.is_empty()) {
            url.push_str("&SOURCE=");
            url.push_str(&urlencoding::encode(source));
        }
        url
    }
}

/// The `utm_source` value of a `location.search` string, if present and non-empty.
///
/// Follows `URLSearchParams` decoding: `+` is a space and the first
/// occurrence wins. Pairs that are not valid percent-encoded UTF-8 are skipped.
#[must_use]
pub fn utm_source(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((decode_component(key)?, decode_component(value)?))
        })
        .find(|(key, _)| key == "utm_source")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => None,
    }
}
