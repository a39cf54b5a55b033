use super::*;

#[test]
fn accepts_plain_address() {
    assert_eq!(validate_email("reader@example.com"), Ok("reader@example.com".to_owned()));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(validate_email("  reader@example.org \n"), Ok("reader@example.org".to_owned()));
}

#[test]
fn accepts_subdomains_and_plus_tags() {
    assert!(validate_email("first.last+news@mail.law.example.edu").is_ok());
}

#[test]
fn blank_input_is_missing() {
    assert_eq!(validate_email(""), Err(EmailError::Missing));
    assert_eq!(validate_email("   "), Err(EmailError::Missing));
}

#[test]
fn rejects_malformed_addresses() {
    for bad in ["reader", "reader@", "@example.com", "reader@example", "a@b@c.com", "read er@example.com"] {
        assert_eq!(validate_email(bad), Err(EmailError::Malformed), "{bad} should be rejected");
    }
}

#[test]
fn messages_match_form_copy() {
    assert_eq!(EmailError::Missing.to_string(), "Email is required");
    assert_eq!(EmailError::Malformed.to_string(), "Please enter a valid email address");
}
