//! Email address validation.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

use super::error::EmailError;

/// Something, an `@`, something, a dot, something; no whitespace, one `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile"));

/// Trim and check an address typed into the signup form.
///
/// # Errors
///
/// [`EmailError::Missing`] for blank input, [`EmailError::Malformed`] when the
/// address does not look like `name@domain.tld`.
pub fn validate_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Missing);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(EmailError::Malformed);
    }
    Ok(email.to_owned())
}
