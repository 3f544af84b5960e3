#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::ContactSubmission;

/// Contact form fields and their inline error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// The inline message shown when this field fails validation.
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 2 characters long",
            Self::Email => "Please enter a valid email address",
            Self::Subject => "Please select a subject",
            Self::Message => "Message must be at least 10 characters long",
        }
    }
}

/// Raw contact form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
}

impl ContactForm {
    /// Validate every field, returning the fields that failed in display
    /// order. An empty result means the form may be submitted.
    pub fn validate(&self) -> Vec<Field> {
        let mut failed = Vec::new();
        if !validate_name(&self.name) {
            failed.push(Field::Name);
        }
        if !validate_email(&self.email) {
            failed.push(Field::Email);
        }
        if !validate_subject(&self.subject) {
            failed.push(Field::Subject);
        }
        if !validate_message(&self.message) {
            failed.push(Field::Message);
        }
        failed
    }

    /// Snapshot a validated form for persistence.
    pub fn submission(&self, timestamp: String) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            newsletter: self.newsletter,
            timestamp,
        }
    }
}

/// Name: trimmed length of at least 2 characters.
pub fn validate_name(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

/// Email: `local@domain` where neither side contains whitespace or another
/// `@`, and the domain has at least one interior dot.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Subject: any non-empty selection.
pub fn validate_subject(subject: &str) -> bool {
    !subject.is_empty()
}

/// Message: trimmed length of at least 10 characters.
pub fn validate_message(message: &str) -> bool {
    message.trim().chars().count() >= 10
}
