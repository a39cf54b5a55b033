//! Newsletter error types. `Display` is the exact text shown to the reader.

use thiserror::Error;

/// Why an address was refused before anything was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email is required")]
    Missing,
    #[error("Please enter a valid email address")]
    Malformed,
}

/// Why a signup did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribeError {
    #[error(transparent)]
    Validation(#[from] EmailError),
    /// The provider answered with a failure; the message is already cleaned.
    #[error("{0}")]
    Rejected(String),
    /// The script failed to load or no reply arrived in time.
    #[error("Connection error. Please try again.")]
    Connection,
    /// No window/document to inject the request into.
    #[error("Subscriptions are unavailable right now. Please try again later.")]
    Unavailable,
}
