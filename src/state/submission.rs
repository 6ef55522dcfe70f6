//! Submission state machine and user-facing outcome mapping

use super::forms::{sanitize, ContactForm};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "There was a problem sending your message. Please try again later.";

/// JSON body posted to the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactPayload {
    /// Sanitize the five semantic fields. Country code is not sent.
    pub fn from_form(form: &ContactForm) -> Self {
        Self {
            firstname: sanitize(form.first_name.as_text()),
            lastname: sanitize(form.last_name.as_text()),
            email: sanitize(form.email.as_text()),
            phone: sanitize(form.phone.as_text()),
            message: sanitize(form.message.as_text()),
        }
    }
}

/// What the endpoint said about a delivered request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResponse {
    /// Any 2xx; the body is ignored
    Accepted,
    /// Non-2xx with the body text verbatim
    Rejected { status: u16, detail: String },
}

/// Where the single in-flight exchange stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending { attempt_id: Uuid },
}

impl SubmissionState {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending { .. })
    }
}

/// Why a submit intent was not acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    FormIncomplete,
    AlreadySending,
}

/// Kind of modal acknowledgment shown after an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    Info,
}

/// A modal message waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Sent".to_string(),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn rejected(detail: &str) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: "Not sent".to_string(),
            message: format!("Failed to send message: {detail}"),
        }
    }

    pub fn transport_failure() -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: "Error".to_string(),
            message: TRANSPORT_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }
}
