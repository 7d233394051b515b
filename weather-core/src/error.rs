use thiserror::Error;

/// Fallback text for failures that carry no message of their own.
pub const GENERIC_MESSAGE: &str = "something went wrong";

/// Every way a single city lookup can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Geocoding or forecast endpoint answered with a non-success status.
    #[error("{status} {reason}")]
    Service { status: u16, reason: String },

    /// Geocoding succeeded but matched nothing.
    #[error("city not found")]
    NotFound,

    /// Request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// Response body was not the JSON we expected.
    #[error("{0}")]
    Decode(String),
}

impl LookupError {
    pub fn service(status: reqwest::StatusCode) -> Self {
        Self::Service {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Single line suitable for the error region.
    pub fn user_message(&self) -> String {
        let msg = self.to_string();
        let msg = msg.trim();
        if msg.is_empty() { GENERIC_MESSAGE.to_string() } else { msg.to_string() }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
