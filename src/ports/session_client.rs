//! Session API client port definition.

use serde_json::Value;

use crate::domain::AppError;

/// Outcome of one session submission.
///
/// Transport failures are reported with `status_code == 0` and the error text
/// as the body, so callers never branch on connectivity separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResponse {
    pub status_code: u16,
    pub text: String,
}

impl SessionResponse {
    pub fn new(status_code: u16, text: impl Into<String>) -> Self {
        Self { status_code, text: text.into() }
    }

    /// A response that never reached the server.
    pub fn transport_failure(reason: impl Into<String>) -> Self {
        Self::new(0, reason)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Decode the body as JSON; an empty body decodes as `{}`.
    pub fn json(&self) -> Result<Value, AppError> {
        let body = if self.text.trim().is_empty() { "{}" } else { self.text.as_str() };
        serde_json::from_str(body).map_err(|e| AppError::ParseError {
            what: "session response".to_string(),
            details: e.to_string(),
        })
    }
}

/// Port for session API operations.
pub trait SessionClient {
    /// Submit one prompt as a new session.
    fn post_prompt(&self, prompt: &str) -> SessionResponse;
}
