//! Contact form message model.
//!
//! Submissions are validated here and persisted as a single row; there is no
//! further workflow attached to them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`ContactMessage::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    EmptyEmail,
    InvalidEmail,
    EmptySubject,
    EmptyMessage,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter your name."),
            Self::EmptyEmail => write!(f, "Please enter your email address."),
            Self::InvalidEmail => write!(f, "Please enter a valid email address."),
            Self::EmptySubject => write!(f, "Please enter a subject."),
            Self::EmptyMessage => write!(f, "Please enter a message."),
        }
    }
}

impl std::error::Error for ContactValidationError {}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !value.chars().any(char::is_whitespace)
}

impl ContactMessage {
    /// Validate raw form fields and construct a message.
    ///
    /// All fields are trimmed; every field must be non-empty and the email
    /// must look like an address.
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactValidationError> {
        let name = name.trim();
        let email = email.trim();
        let subject = subject.trim();
        let message = message.trim();

        if name.is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        if email.is_empty() {
            return Err(ContactValidationError::EmptyEmail);
        }
        if !is_plausible_email(email) {
            return Err(ContactValidationError::InvalidEmail);
        }
        if subject.is_empty() {
            return Err(ContactValidationError::EmptySubject);
        }
        if message.is_empty() {
            return Err(ContactValidationError::EmptyMessage);
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            subject: subject.to_owned(),
            message: message.to_owned(),
        })
    }

    /// Sender name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Sender email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Message subject line.
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Message body.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn valid_submission_is_accepted_and_trimmed() {
        let message = ContactMessage::new(
            "  Don Althaus ",
            "don@example.com",
            "Print enquiry",
            "Is the Havasu print available?",
        )
        .expect("valid submission");
        assert_eq!(message.name(), "Don Althaus");
        assert_eq!(message.email(), "don@example.com");
    }

    #[rstest]
    #[case("", "a@b.com", "s", "m", ContactValidationError::EmptyName)]
    #[case("n", "", "s", "m", ContactValidationError::EmptyEmail)]
    #[case("n", "not-an-email", "s", "m", ContactValidationError::InvalidEmail)]
    #[case("n", "a b@c.com", "s", "m", ContactValidationError::InvalidEmail)]
    #[case("n", "a@nodot", "s", "m", ContactValidationError::InvalidEmail)]
    #[case("n", "a@b.com", " ", "m", ContactValidationError::EmptySubject)]
    #[case("n", "a@b.com", "s", "", ContactValidationError::EmptyMessage)]
    fn invalid_submissions_are_rejected(
        #[case] name: &str,
        #[case] email: &str,
        #[case] subject: &str,
        #[case] message: &str,
        #[case] expected: ContactValidationError,
    ) {
        let err = ContactMessage::new(name, email, subject, message);
        assert_eq!(err.expect_err("invalid submission"), expected);
    }
}
