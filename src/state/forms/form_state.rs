//! Contact form state and the snapshot handed to senders

use super::field::FormField;
use super::validation::{self, ContactField, ErrorMap};
use serde::{Deserialize, Serialize};

/// The three user-editable contact form fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", "Your name", false),
            email: FormField::text("email", "Email", "you@example.com", false),
            message: FormField::text("message", "Message", "Tell me about your project...", true),
        }
    }

    pub fn field(&self, field: ContactField) -> &FormField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut FormField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Overwrite one field's value
    pub fn set(&mut self, field: ContactField, value: String) {
        self.field_mut(field).set_text(value);
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        for field in ContactField::ALL {
            self.field_mut(field).clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|f| self.field(*f).as_text().is_empty())
    }

    pub fn validate(&self) -> ErrorMap {
        validation::validate(
            self.name.as_text(),
            self.email.as_text(),
            self.message.as_text(),
        )
    }

    /// Copy the current values out for delivery
    pub fn snapshot(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Values of a submitted contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldError;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ana".to_string());
        form.set(ContactField::Email, "ana@x.com".to_string());
        form.set(ContactField::Message, "Hello there, nice site!".to_string());
        form
    }

    #[test]
    fn test_new_form_is_blank() {
        let form = ContactForm::new();
        assert!(form.is_blank());
        assert!(form.message.is_multiline);
        assert!(!form.name.is_multiline);
    }

    #[test]
    fn test_set_targets_one_field() {
        let mut form = ContactForm::new();
        form.set(ContactField::Email, "ana@x.com".to_string());
        assert_eq!(form.email.as_text(), "ana@x.com");
        assert_eq!(form.name.as_text(), "");
        assert_eq!(form.message.as_text(), "");
    }

    #[test]
    fn test_snapshot_copies_raw_values() {
        let mut form = filled_form();
        form.set(ContactField::Name, "  Ana  ".to_string());
        assert_eq!(
            form.snapshot(),
            ContactMessage {
                name: "  Ana  ".to_string(),
                email: "ana@x.com".to_string(),
                message: "Hello there, nice site!".to_string(),
            }
        );
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut form = filled_form();
        form.clear();
        assert!(form.is_blank());
        assert_eq!(form.snapshot(), ContactMessage::default());
    }

    #[test]
    fn test_validate_reads_current_values() {
        let mut form = filled_form();
        assert!(form.validate().is_empty());

        form.set(ContactField::Message, "short".to_string());
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(ContactField::Message), Some(FieldError::MessageTooShort));
    }

    #[test]
    fn test_contact_message_serializes_field_names() {
        let json = serde_json::to_value(filled_form().snapshot()).unwrap();
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["email"], "ana@x.com");
        assert_eq!(json["message"], "Hello there, nice site!");
    }
}
