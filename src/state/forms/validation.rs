//! Contact form validation rules
//!
//! Every field is checked on each pass; the resulting [`ErrorMap`] only
//! holds the fields that failed.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum trimmed length of the message body, in characters
pub const MIN_MESSAGE_LEN: usize = 10;

/// Identifies one of the three contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-field validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("name required")]
    NameRequired,
    #[error("email required")]
    EmailRequired,
    #[error("invalid email format")]
    InvalidEmailFormat,
    #[error("message required")]
    MessageRequired,
    #[error("message too short")]
    MessageTooShort,
}

/// Current validation errors, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<ContactField, FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the entry for `field`, returning it if there was one
    pub fn remove(&mut self, field: ContactField) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, field: ContactField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }
}

impl FromIterator<(ContactField, FieldError)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (ContactField, FieldError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("Invalid regex pattern"))
}

/// Whether `value` looks like `<non-space>@<non-space>.<non-space>`
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

pub fn check_name(name: &str) -> Option<FieldError> {
    if name.trim().is_empty() {
        Some(FieldError::NameRequired)
    } else {
        None
    }
}

pub fn check_email(email: &str) -> Option<FieldError> {
    if email.trim().is_empty() {
        Some(FieldError::EmailRequired)
    } else if !is_valid_email(email) {
        Some(FieldError::InvalidEmailFormat)
    } else {
        None
    }
}

pub fn check_message(message: &str) -> Option<FieldError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        Some(FieldError::MessageRequired)
    } else if trimmed.chars().count() < MIN_MESSAGE_LEN {
        Some(FieldError::MessageTooShort)
    } else {
        None
    }
}

/// Validate all three fields independently
pub fn validate(name: &str, email: &str, message: &str) -> ErrorMap {
    [
        (ContactField::Name, check_name(name)),
        (ContactField::Email, check_email(email)),
        (ContactField::Message, check_message(message)),
    ]
    .into_iter()
    .filter_map(|(field, error)| error.map(|e| (field, e)))
    .collect()
}
