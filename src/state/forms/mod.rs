//! Form domain layer
//!
//! Field values, the contact form record and its validation rules.

mod field;
mod form_state;
mod validation;

pub use field::FormField;
pub use form_state::{ContactForm, ContactMessage};
pub use validation::{ContactField, ErrorMap, FieldError};
