//! Contact endpoint client module

mod client;
mod traits;

pub use client::{ContactClient, ContactError};
pub use traits::ContactClientTrait;

#[cfg(test)]
pub use traits::MockContactClientTrait;
