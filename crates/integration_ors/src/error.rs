//! ORS error types

use thiserror::Error;

/// Errors that can occur when talking to OpenRouteService
#[derive(Debug, Error)]
pub enum OrsError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the service
        body: String,
    },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The response was well-formed but contained no features
    #[error("No results for {0}")]
    NoResults(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl OrsError {
    pub(crate) fn from_reqwest(error: &reqwest::Error, timeout_secs: u64) -> Self {
        if error.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrsError::Status {
            status: 404,
            body: r#"{"error":"Route could not be found"}"#.to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Route could not be found"));

        let err = OrsError::Timeout { timeout_secs: 15 };
        assert!(err.to_string().contains("15"));
    }
}
