//! Catalog API client error types

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single catalog API request
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The backend answered with a non-2xx status
    #[error("Catalog API returned status {status}{}", .detail.as_deref().map(|d| format!(": {}", d)).unwrap_or_default())]
    Status { status: u16, detail: Option<String> },

    /// The request never produced a response
    #[error("Catalog API request failed: {0}")]
    Transport(String),

    /// A 2xx response carried a payload that could not be decoded
    #[error("Failed to decode catalog API response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ApiClientError {
    /// Build a status error, picking `detail` out of a JSON error body
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| match d {
                serde_json::Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            });
        Self::Status { status, detail }
    }

    /// Human-readable message supplied by the backend, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
