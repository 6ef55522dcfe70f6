//! HTTP client for the contact endpoint

use super::traits::ContactClientTrait;
use crate::state::{ContactPayload, SubmitResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failures of the exchange itself, as opposed to a server rejection
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Client posting contact messages as JSON
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    /// Create a new client for `endpoint`
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ContactError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ContactError::Build)?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport(&self, source: reqwest::Error) -> ContactError {
        ContactError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait]
impl ContactClientTrait for ContactClient {
    async fn send_message(&self, payload: &ContactPayload) -> Result<SubmitResponse, ContactError> {
        let response = self
            .http
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(payload)
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        let status = response.status();
        debug!(status = status.as_u16(), "contact endpoint responded");

        if status.is_success() {
            return Ok(SubmitResponse::Accepted);
        }

        let detail = response.text().await.map_err(|e| self.transport(e))?;
        Ok(SubmitResponse::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}
