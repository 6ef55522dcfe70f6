//! Contact form state and the validation pass that owns submit eligibility

use super::field::{FieldId, FormField};
use super::phone::{format_phone, has_repeated_digits};
use super::validators::{validate_email, validate_message, validate_name, validate_phone};

pub const FIRST_NAME_MESSAGE: &str = "First name must be at least 3 letters long";
pub const LAST_NAME_MESSAGE: &str = "Last name must be at least 3 letters long";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Phone number must be in (XXX) XXX-XXXX format";
pub const PHONE_REPEATED_MESSAGE: &str = "Phone number cannot have repetitive digits";
pub const MESSAGE_MESSAGE: &str = "Message cannot be empty";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// A single edit dispatched to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    /// Only honoured by multiline fields
    Newline,
    /// Empty the whole field
    Clear,
}

/// Outcome of the last validation pass for each validated field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldValidity {
    pub first_name: bool,
    pub last_name: bool,
    pub email: bool,
    pub phone: bool,
    pub message: bool,
}

impl FieldValidity {
    pub fn aggregate(&self) -> AggregateValidity {
        if self.first_name && self.last_name && self.email && self.phone && self.message {
            AggregateValidity::Ready
        } else {
            AggregateValidity::Incomplete
        }
    }

    /// Fields that currently block submission, in tab order
    pub fn failing(&self) -> Vec<FieldId> {
        [
            (FieldId::FirstName, self.first_name),
            (FieldId::LastName, self.last_name),
            (FieldId::Email, self.email),
            (FieldId::Phone, self.phone),
            (FieldId::Message, self.message),
        ]
        .into_iter()
        .filter_map(|(id, ok)| (!ok).then_some(id))
        .collect()
    }
}

/// Whether the form as a whole may be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregateValidity {
    Ready,
    #[default]
    Incomplete,
}

/// The contact form: six inputs plus the submit row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub country_code: FormField,
    pub phone: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    validity: FieldValidity,
    submit_enabled: bool,
    default_country_code: String,
}

impl ContactForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = 6;

    /// Build an empty form and run the initial validation pass
    pub fn new(default_country_code: &str) -> Self {
        let mut form = Self {
            first_name: FormField::text(FieldId::FirstName, false),
            last_name: FormField::text(FieldId::LastName, false),
            email: FormField::text(FieldId::Email, false),
            country_code: FormField::text_with_value(
                FieldId::CountryCode,
                default_country_code.to_string(),
                false,
            ),
            phone: FormField::text(FieldId::Phone, false),
            message: FormField::text(FieldId::Message, true),
            active_field_index: 0,
            validity: FieldValidity::default(),
            submit_enabled: false,
            default_country_code: default_country_code.to_string(),
        };
        form.validate_form();
        form
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::CountryCode => &self.country_code,
            FieldId::Phone => &self.phone,
            FieldId::Message => &self.message,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::CountryCode => &mut self.country_code,
            FieldId::Phone => &mut self.phone,
            FieldId::Message => &mut self.message,
        }
    }

    pub fn validity(&self) -> FieldValidity {
        self.validity
    }

    /// Mirrors the submit control: disabled whenever this is false
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::from_index(self.active_field_index)
    }

    /// Apply one edit to a field, then recompute validity
    pub fn apply_input(&mut self, id: FieldId, input: FormInput) -> AggregateValidity {
        let field = self.field_mut(id);
        match input {
            FormInput::Char(c) => field.push_char(c),
            FormInput::Backspace => field.pop_char(),
            FormInput::Newline if field.is_multiline => field.push_char('\n'),
            FormInput::Newline => {}
            FormInput::Clear => field.clear(),
        }
        if id == FieldId::Phone {
            let formatted = format_phone(self.phone.as_text());
            self.phone.set_text(formatted);
        }
        self.validate_form()
    }

    /// Apply an edit to whichever field has focus; no-op on the submit row
    pub fn input_active(&mut self, input: FormInput) -> Option<AggregateValidity> {
        let id = self.active_field_id()?;
        Some(self.apply_input(id, input))
    }

    /// Replace a field value wholesale (paste), then recompute validity
    pub fn set_value(&mut self, id: FieldId, value: &str) -> AggregateValidity {
        let value = if id == FieldId::Phone {
            format_phone(value)
        } else {
            value.to_string()
        };
        self.field_mut(id).set_text(value);
        self.validate_form()
    }

    /// Check a single field and update its inline error
    pub fn validate_field(
        field: &mut FormField,
        validator: fn(&str) -> bool,
        message: &str,
    ) -> bool {
        let is_valid = validator(field.as_text().trim());
        if is_valid {
            field.clear_error();
        } else {
            field.set_error(message);
        }
        is_valid
    }

    /// Recompute every field and the submit eligibility; the only place either changes
    pub fn validate_form(&mut self) -> AggregateValidity {
        let first_name =
            Self::validate_field(&mut self.first_name, validate_name, FIRST_NAME_MESSAGE);
        let last_name = Self::validate_field(&mut self.last_name, validate_name, LAST_NAME_MESSAGE);
        let email = Self::validate_field(&mut self.email, validate_email, EMAIL_MESSAGE);

        let mut phone = Self::validate_field(&mut self.phone, validate_phone, PHONE_MESSAGE);
        if has_repeated_digits(self.phone.as_text()) {
            self.phone.set_error(PHONE_REPEATED_MESSAGE);
            phone = false;
        }

        let message = Self::validate_field(&mut self.message, validate_message, MESSAGE_MESSAGE);

        self.validity = FieldValidity {
            first_name,
            last_name,
            email,
            phone,
            message,
        };
        let aggregate = self.validity.aggregate();
        self.submit_enabled = aggregate == AggregateValidity::Ready;
        aggregate
    }

    /// Return every input to its default after a successful send.
    ///
    /// Inline errors are cleared and the submit control is disabled until the
    /// next edit runs a fresh validation pass.
    pub fn reset(&mut self) {
        for id in FieldId::ALL {
            let field = self.field_mut(id);
            field.clear();
            field.clear_error();
        }
        let default_country_code = self.default_country_code.clone();
        self.country_code.set_text(default_country_code);
        self.active_field_index = 0;
        self.validity = FieldValidity::default();
        self.submit_enabled = false;
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        7 // six inputs + submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let id = self.active_field_id()?;
        Some(self.field_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut ContactForm, id: FieldId, text: &str) {
        for c in text.chars() {
            form.apply_input(id, FormInput::Char(c));
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new("+1");
        type_text(&mut form, FieldId::FirstName, "Ann");
        type_text(&mut form, FieldId::LastName, "Smith");
        type_text(&mut form, FieldId::Email, "ann@example.com");
        type_text(&mut form, FieldId::Phone, "5551234567");
        type_text(&mut form, FieldId::Message, "Hello there");
        form
    }

    mod initial_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_validated_eagerly() {
            let form = ContactForm::new("+1");
            assert!(!form.submit_enabled());
            assert_eq!(form.validity().aggregate(), AggregateValidity::Incomplete);
            assert_eq!(form.first_name.error, FIRST_NAME_MESSAGE);
            assert_eq!(form.message.error, MESSAGE_MESSAGE);
            assert!(form.email.invalid);
        }

        #[test]
        fn test_country_code_has_default_and_no_error() {
            let form = ContactForm::new("+44");
            assert_eq!(form.country_code.as_text(), "+44");
            assert!(form.country_code.error.is_empty());
            assert!(!form.country_code.invalid);
        }

        #[test]
        fn test_everything_fails_initially() {
            let form = ContactForm::new("+1");
            assert_eq!(
                form.validity().failing(),
                vec![
                    FieldId::FirstName,
                    FieldId::LastName,
                    FieldId::Email,
                    FieldId::Phone,
                    FieldId::Message
                ]
            );
        }
    }

    mod aggregate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_all_fields_valid_enables_submit() {
            let form = filled_form();
            assert_eq!(form.validity().aggregate(), AggregateValidity::Ready);
            assert!(form.submit_enabled());
            assert!(form.validity().failing().is_empty());
            for id in FieldId::ALL {
                assert!(form.field(id).error.is_empty(), "{id:?} has an error");
            }
        }

        #[test]
        fn test_clearing_any_field_disables_submit() {
            for id in [
                FieldId::FirstName,
                FieldId::LastName,
                FieldId::Email,
                FieldId::Phone,
                FieldId::Message,
            ] {
                let mut form = filled_form();
                let result = form.apply_input(id, FormInput::Clear);
                assert_eq!(result, AggregateValidity::Incomplete);
                assert!(!form.submit_enabled(), "{id:?} cleared but submit enabled");
                assert!(form.field(id).invalid);
            }
        }

        #[test]
        fn test_country_code_edit_recomputes_without_blocking() {
            let mut form = filled_form();
            form.apply_input(FieldId::CountryCode, FormInput::Clear);
            assert!(form.submit_enabled());
            assert_eq!(form.country_code.as_text(), "");
        }

        #[test]
        fn test_validate_form_is_idempotent() {
            let mut form = filled_form();
            form.apply_input(FieldId::Email, FormInput::Backspace);
            let before = (form.validity(), form.submit_enabled(), form.email.error.clone());
            form.validate_form();
            form.validate_form();
            let after = (form.validity(), form.submit_enabled(), form.email.error.clone());
            assert_eq!(before, after);
        }

        #[test]
        fn test_fixing_a_field_clears_its_error() {
            let mut form = ContactForm::new("+1");
            type_text(&mut form, FieldId::FirstName, "Jo");
            assert_eq!(form.first_name.error, FIRST_NAME_MESSAGE);
            type_text(&mut form, FieldId::FirstName, "e");
            assert!(form.first_name.error.is_empty());
            assert!(!form.first_name.invalid);
        }

        #[test]
        fn test_names_are_trimmed_before_validation() {
            let mut form = ContactForm::new("+1");
            form.set_value(FieldId::FirstName, "  Ann  ");
            assert!(form.validity().first_name);
        }
    }

    mod phone_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_digits_applies_mask() {
            let mut form = ContactForm::new("+1");
            type_text(&mut form, FieldId::Phone, "555");
            assert_eq!(form.phone.as_text(), "(555");
            type_text(&mut form, FieldId::Phone, "1234567");
            assert_eq!(form.phone.as_text(), "(555) 123-4567");
            assert!(form.validity().phone);
        }

        #[test]
        fn test_letters_are_dropped() {
            let mut form = ContactForm::new("+1");
            type_text(&mut form, FieldId::Phone, "55a5");
            assert_eq!(form.phone.as_text(), "(555");
        }

        #[test]
        fn test_eleventh_digit_is_kept_raw_and_invalid() {
            let mut form = ContactForm::new("+1");
            type_text(&mut form, FieldId::Phone, "55512345678");
            assert_eq!(form.phone.as_text(), "(555) 123-45678");
            assert!(!form.validity().phone);
            assert_eq!(form.phone.error, PHONE_MESSAGE);
        }

        #[test]
        fn test_backspace_reformats() {
            let mut form = ContactForm::new("+1");
            type_text(&mut form, FieldId::Phone, "5551");
            assert_eq!(form.phone.as_text(), "(555) 1");
            form.apply_input(FieldId::Phone, FormInput::Backspace);
            assert_eq!(form.phone.as_text(), "(555");
        }

        #[test]
        fn test_repeated_digits_are_rejected_with_own_message() {
            let mut form = ContactForm::new("+1");
            type_text(&mut form, FieldId::Phone, "1111111111");
            assert_eq!(form.phone.as_text(), "(111) 111-1111");
            assert!(!form.validity().phone);
            assert!(form.phone.invalid);
            assert_eq!(form.phone.error, PHONE_REPEATED_MESSAGE);
        }

        #[test]
        fn test_paste_is_formatted() {
            let mut form = ContactForm::new("+1");
            form.set_value(FieldId::Phone, "555.123.4567");
            assert_eq!(form.phone.as_text(), "(555) 123-4567");
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_newline_only_reaches_multiline_fields() {
            let mut form = ContactForm::new("+1");
            form.apply_input(FieldId::FirstName, FormInput::Newline);
            assert_eq!(form.first_name.as_text(), "");
            form.apply_input(FieldId::Message, FormInput::Char('a'));
            form.apply_input(FieldId::Message, FormInput::Newline);
            assert_eq!(form.message.as_text(), "a\n");
        }

        #[test]
        fn test_input_on_submit_row_is_ignored() {
            let mut form = ContactForm::new("+1");
            form.set_active_field(ContactForm::SUBMIT_ROW);
            assert!(form.input_active(FormInput::Char('x')).is_none());
        }

        #[test]
        fn test_input_active_targets_focused_field() {
            let mut form = ContactForm::new("+1");
            form.set_active_field(FieldId::Email.index());
            form.input_active(FormInput::Char('a'));
            assert_eq!(form.email.as_text(), "a");
        }

        #[test]
        fn test_next_and_prev_wrap() {
            let mut form = ContactForm::new("+1");
            form.prev_field();
            assert!(form.is_submit_row_active());
            form.next_field();
            assert_eq!(form.active_field(), 0);
        }

    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_clears_values_and_disables_submit() {
            let mut form = filled_form();
            form.apply_input(FieldId::CountryCode, FormInput::Char('2'));
            form.set_active_field(ContactForm::SUBMIT_ROW);
            form.reset();

            assert!(!form.submit_enabled());
            assert_eq!(form.first_name.as_text(), "");
            assert_eq!(form.phone.as_text(), "");
            assert_eq!(form.message.as_text(), "");
            assert_eq!(form.country_code.as_text(), "+1");
            assert_eq!(form.active_field(), 0);
            assert!(FieldId::ALL.iter().all(|id| form.field(*id).error.is_empty()));
        }

        #[test]
        fn test_edit_after_reset_revalidates() {
            let mut form = filled_form();
            form.reset();
            form.apply_input(FieldId::FirstName, FormInput::Char('A'));
            assert_eq!(form.last_name.error, LAST_NAME_MESSAGE);
            assert!(!form.submit_enabled());
        }
    }
}
