use super::*;

fn form_with(email: &str) -> NewsletterForm {
    NewsletterForm { email: email.to_owned(), status: FormStatus::Idle }
}

// =============================================================
// Validation on submit
// =============================================================

#[test]
fn empty_field_reports_required() {
    let mut form = form_with("   ");
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form.error_message(), Some("Email is required"));
}

#[test]
fn malformed_address_reports_invalid() {
    let mut form = form_with("reader@example");
    assert_eq!(form.begin_submit(), None);
    assert_eq!(form.error_message(), Some("Please enter a valid email address"));
}

#[test]
fn valid_address_is_trimmed_and_submitting() {
    let mut form = form_with("  reader@example.com ");
    assert_eq!(form.begin_submit(), Some("reader@example.com".to_owned()));
    assert!(form.is_submitting());
    assert_eq!(form.error_message(), None);
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut form = form_with("reader@example.com");
    assert!(form.begin_submit().is_some());
    assert_eq!(form.begin_submit(), None);
    assert!(form.is_submitting());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn typing_clears_error() {
    let mut form = form_with("");
    form.begin_submit();
    form.edit("r".to_owned());
    assert_eq!(form.status, FormStatus::Idle);
    assert_eq!(form.email, "r");
}

#[test]
fn typing_keeps_success_message() {
    let mut form = form_with("reader@example.com");
    form.begin_submit();
    form.finish(Ok(()));
    form.edit("x".to_owned());
    assert!(form.is_success());
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn success_clears_field() {
    let mut form = form_with("reader@example.com");
    form.begin_submit();
    form.finish(Ok(()));
    assert!(form.is_success());
    assert!(form.email.is_empty());
}

#[test]
fn rejection_keeps_field_and_shows_message() {
    let mut form = form_with("reader@example.com");
    form.begin_submit();
    form.finish(Err(SubscribeError::Rejected("This email is already subscribed.".to_owned())));
    assert_eq!(form.email, "reader@example.com");
    assert_eq!(form.error_message(), Some("This email is already subscribed."));
}

#[test]
fn connection_failure_shows_retry_message() {
    let mut form = form_with("reader@example.com");
    form.begin_submit();
    form.finish(Err(SubscribeError::Connection));
    assert_eq!(form.error_message(), Some("Connection error. Please try again."));
}

#[test]
fn failed_form_can_be_resubmitted() {
    let mut form = form_with("reader@example.com");
    form.begin_submit();
    form.finish(Err(SubscribeError::Connection));
    assert_eq!(form.begin_submit(), Some("reader@example.com".to_owned()));
}

#[test]
fn success_expires_to_idle() {
    let mut form = form_with("reader@example.com");
    form.begin_submit();
    form.finish(Ok(()));
    form.expire_success();
    assert_eq!(form.status, FormStatus::Idle);
}

#[test]
fn expiry_leaves_errors_alone() {
    let mut form = form_with("");
    form.begin_submit();
    form.expire_success();
    assert_eq!(form.error_message(), Some("Email is required"));
}
