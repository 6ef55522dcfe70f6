//! Form rendering module
//!
//! - `field_renderer`: field box with inline error line
//! - `contact_form`: the contact form layout

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
