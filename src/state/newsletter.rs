//! Newsletter form state.
//!
//! DESIGN
//! ======
//! The signup component keeps one `RwSignal<NewsletterForm>` and renders
//! everything from it; all transitions live here so they are tested without a
//! browser. Only one request is in flight at a time.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use crate::newsletter::{SubscribeError, validate_email};

/// Text shown after a successful signup.
pub const SUCCESS_MESSAGE: &str = "Thank you for subscribing!";

/// Where the form is in its submit cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    /// Validation or provider error, shown under the field.
    Failed(String),
    /// Success message visible until [`NewsletterForm::expire_success`].
    Subscribed,
}

/// Field contents plus status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
    pub status: FormStatus,
}

impl NewsletterForm {
    /// Typing replaces the field and clears any error.
    pub fn edit(&mut self, value: String) {
        self.email = value;
        if matches!(self.status, FormStatus::Failed(_)) {
            self.status = FormStatus::Idle;
        }
    }

    /// Validate and enter `Submitting`, returning the address to send.
    ///
    /// Returns `None` while a request is already in flight, or when
    /// validation fails (the error is then recorded in the status).
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_submitting() {
            return None;
        }
        match validate_email(&self.email) {
            Ok(address) => {
                self.status = FormStatus::Submitting;
                Some(address)
            }
            Err(err) => {
                self.status = FormStatus::Failed(err.to_string());
                None
            }
        }
    }

    /// Record the outcome of a request; success clears the field.
    pub fn finish(&mut self, outcome: Result<(), SubscribeError>) {
        match outcome {
            Ok(()) => {
                self.email.clear();
                self.status = FormStatus::Subscribed;
            }
            Err(err) => self.status = FormStatus::Failed(err.to_string()),
        }
    }

    /// Hide the success message; other states are left alone.
    pub fn expire_success(&mut self) {
        if self.status == FormStatus::Subscribed {
            self.status = FormStatus::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == FormStatus::Subscribed
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
