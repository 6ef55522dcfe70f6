//! Form field value objects

/// Identifies one of the contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    CountryCode,
    Phone,
    Message,
}

impl FieldId {
    /// All inputs in tab order
    pub const ALL: [FieldId; 6] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::CountryCode,
        FieldId::Phone,
        FieldId::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::CountryCode => "Country code",
            Self::Phone => "Phone",
            Self::Message => "Message",
        }
    }

    /// Index of this field in [`FieldId::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::CountryCode => 3,
            Self::Phone => 4,
            Self::Message => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Represents a single form field with its current value and validation feedback
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
    /// Inline error text, empty when the field is valid
    pub error: String,
    /// Drives the red "invalid" border
    pub invalid: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(id: FieldId, is_multiline: bool) -> Self {
        Self::text_with_value(id, String::new(), is_multiline)
    }

    /// Create a new text field with initial value
    pub fn text_with_value(id: FieldId, value: String, is_multiline: bool) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value,
            is_multiline,
            error: String::new(),
            invalid: false,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the value in place (used by the phone mask)
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Record the outcome of a validation pass
    pub fn set_error(&mut self, message: &str) {
        self.error = message.to_string();
        self.invalid = true;
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
        self.invalid = false;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.value.clone()
    }
}
