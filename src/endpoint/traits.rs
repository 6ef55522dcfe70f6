//! Trait abstraction for the contact client to enable mocking in tests

use super::client::ContactError;
use crate::state::{ContactPayload, SubmitResponse};
use async_trait::async_trait;

/// Trait for contact endpoint operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactClientTrait: Send + Sync {
    /// Post one message.
    ///
    /// `Ok` means a response arrived (accepted or rejected by the server);
    /// `Err` means the exchange itself failed.
    async fn send_message(&self, payload: &ContactPayload) -> Result<SubmitResponse, ContactError>;
}
