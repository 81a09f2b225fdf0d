//! Errors surfaced by API calls.

use thiserror::Error;

/// A failed backend call.
///
/// Kept `Clone + PartialEq` so views can park it in a signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, bad URL).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("server error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The request body could not be serialised.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error, pulling `message` (or `error`) out of a JSON body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                ["message", "error"].iter().find_map(|key| {
                    json.get(*key)
                        .and_then(|v| v.as_str())
                        .filter(|s| !s.trim().is_empty())
                        .map(str::to_string)
                })
            });
        ApiError::Status { status, message }
    }

    /// Message supplied by the backend, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The backend's message, or the caller's generic fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True when the backend could not be reached at all.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extracted_from_json_body() {
        let err = ApiError::from_status(400, r#"{"message":"Invalid or expired OTP"}"#);
        assert_eq!(err.server_message(), Some("Invalid or expired OTP"));
        assert_eq!(err.message_or("Invalid verification code"), "Invalid or expired OTP");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_error_key_used_when_message_missing() {
        let err = ApiError::from_status(409, r#"{"error":"Email already registered"}"#);
        assert_eq!(err.server_message(), Some("Email already registered"));
    }

    #[test]
    fn test_fallback_for_non_json_body() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.message_or("Failed to reset password"), "Failed to reset password");
        assert_eq!(err.to_string(), "server error (502): no message");
    }

    #[test]
    fn test_network_errors_use_fallback() {
        let err = ApiError::Network("connection refused".into());
        assert!(err.is_network());
        assert!(!err.is_unauthorized());
        assert_eq!(err.message_or("Failed to send reset code"), "Failed to send reset code");
    }

    #[test]
    fn test_status_classification() {
        assert!(ApiError::from_status(401, "").is_unauthorized());
        assert!(ApiError::from_status(403, "{}").is_unauthorized());
        assert!(ApiError::from_status(404, "").is_not_found());
        assert!(!ApiError::from_status(500, "").is_network());
    }
}
