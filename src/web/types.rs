//! Request and response bodies of the `/api/interested` endpoint.

use serde::{Deserialize, Serialize};

use super::{Error, WebResult};

/// The body every JSON response is wrapped in.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn data_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Deserializable submission.
/// Both fields may be missing, the presence check on `email` happens in the registry.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub email: Option<String>,
    /// Older clients still send the contact number as `whatsapp`.
    #[serde(default, alias = "whatsapp")]
    pub contact: Option<String>,
}

impl SubmitRequest {
    /// Parses a raw request body. An empty body counts as a submission without fields.
    pub fn from_body(body: &[u8]) -> WebResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|er| Error::InvalidBody(er.to_string()))
    }
}
