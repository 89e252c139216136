//! Error types for the GitHub client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the GitHub client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Build an API error from a raw response body
    ///
    /// GitHub reports failures as `{"message": "...", "documentation_url": "..."}`;
    /// the `message` field is used when present, the raw body otherwise.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.trim().to_string()
                }
            });
        Self::api_error(status, message)
    }

    /// Human-readable message of the error
    ///
    /// For API errors this is the message reported by the API alone,
    /// without the status prefix of the `Display` form.
    pub fn message(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if the credential was rejected
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_prefers_github_message() {
        let err = ClientError::from_body(
            404,
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#,
        );
        assert_eq!(err.to_string(), "API error (status 404): Not Found");
        assert!(err.is_not_found());
        assert!(err.is_client_error());
    }

    #[test]
    fn test_message_drops_status_prefix() {
        let err = ClientError::from_body(401, r#"{"message":"Bad credentials"}"#);
        assert_eq!(err.message(), "Bad credentials");

        let err = ClientError::ParseError("missing field `runners`".to_string());
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn test_from_body_falls_back_to_raw_text() {
        let err = ClientError::from_body(502, "Bad gateway\n");
        assert_eq!(err.to_string(), "API error (status 502): Bad gateway");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_from_empty_body() {
        let err = ClientError::from_body(401, "");
        assert_eq!(err.to_string(), "API error (status 401): Unknown error");
        assert!(err.is_unauthorized());
    }
}
