//! Form field value objects

/// Represents a single text field of the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new, empty text field
    pub fn text(name: &str, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            is_multiline,
        }
    }

    /// Get the raw value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Value with an appended character, used by key handlers to build the
    /// next value before handing it to the controller
    pub fn with_char(&self, c: char) -> String {
        let mut next = self.value.clone();
        next.push(c);
        next
    }

    /// Value with the last character removed
    pub fn without_last_char(&self) -> String {
        let mut next = self.value.clone();
        next.pop();
        next
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}
