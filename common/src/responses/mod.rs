use serde::{Deserialize, Serialize};

/// Body of every `200` answer from `POST /api/contact`.
///
/// `debug` is only present when the message was accepted but could not be
/// forwarded because the server has no mail credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAccepted {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
}

/// Error body used by every API endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Either contact body, as seen by the client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContactReply {
    Accepted(ContactAccepted),
    Rejected(ApiError),
}

impl ContactReply {
    pub fn message(&self) -> &str {
        match self {
            ContactReply::Accepted(accepted) => &accepted.message,
            ContactReply::Rejected(rejected) => &rejected.message,
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}
