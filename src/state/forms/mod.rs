//! Form domain layer
//!
//! Pure helpers (sanitizer, validators, phone mask) and the `ContactForm`
//! state they feed.

mod field;
mod form_state;
mod phone;
mod sanitize;
mod validators;

pub use field::{FieldId, FormField};
pub use form_state::{ContactForm, Form, FormInput};
pub use sanitize::sanitize;
