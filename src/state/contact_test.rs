use super::*;

// =============================================================
// Field validators
// =============================================================

#[test]
fn name_accepts_two_characters() {
    assert!(validate_name("Al"));
}

#[test]
fn name_rejects_one_character() {
    assert!(!validate_name("A"));
}

#[test]
fn name_trims_surrounding_whitespace() {
    assert!(!validate_name("  A  "));
    assert!(validate_name("  Al  "));
}

#[test]
fn email_accepts_minimal_address() {
    assert!(validate_email("a@b.c"));
    assert!(validate_email("link@hyrule.castle.net"));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!validate_email("a.com"));
    assert!(!validate_email("a@b"));
    assert!(!validate_email("a@.com"));
    assert!(!validate_email("a@com."));
    assert!(!validate_email("a b@c.d"));
    assert!(!validate_email("a@b@c.d"));
    assert!(!validate_email("@b.c"));
    assert!(!validate_email(""));
}

#[test]
fn subject_requires_a_selection() {
    assert!(validate_subject("feedback"));
    assert!(!validate_subject(""));
}

#[test]
fn message_boundary_is_ten_characters() {
    assert!(validate_message("0123456789"));
    assert!(!validate_message("012345678"));
}

#[test]
fn message_counts_trimmed_length() {
    assert!(!validate_message("   012345678   "));
}

// =============================================================
// Whole-form validation
// =============================================================

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Link".to_owned(),
        email: "link@hyrule.net".to_owned(),
        subject: "feedback".to_owned(),
        message: "I found the Ball and Chain!".to_owned(),
        newsletter: true,
    }
}

#[test]
fn valid_form_has_no_failures() {
    assert!(valid_form().validate().is_empty());
}

#[test]
fn each_invalid_field_is_reported() {
    let form = ContactForm {
        name: "A".to_owned(),
        email: "a.com".to_owned(),
        subject: String::new(),
        message: "too short".to_owned(),
        newsletter: false,
    };
    assert_eq!(
        form.validate(),
        vec![Field::Name, Field::Email, Field::Subject, Field::Message]
    );
}

#[test]
fn single_failure_does_not_hide_the_rest() {
    let mut form = valid_form();
    form.email = "nope".to_owned();
    assert_eq!(form.validate(), vec![Field::Email]);
}

// =============================================================
// Submission snapshot
// =============================================================

#[test]
fn submission_copies_all_fields_and_timestamp() {
    let snap = valid_form().submission("2026-08-30T12:00:00.000Z".to_owned());
    assert_eq!(snap.name, "Link");
    assert_eq!(snap.email, "link@hyrule.net");
    assert_eq!(snap.subject, "feedback");
    assert_eq!(snap.message, "I found the Ball and Chain!");
    assert!(snap.newsletter);
    assert_eq!(snap.timestamp, "2026-08-30T12:00:00.000Z");
}

#[test]
fn error_messages_are_field_specific() {
    assert!(Field::Name.error_message().contains('2'));
    assert!(Field::Message.error_message().contains("10"));
    assert!(Field::Email.error_message().contains("email"));
    assert!(Field::Subject.error_message().contains("subject"));
}
