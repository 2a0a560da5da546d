//! Client error types.

use thiserror::Error;

/// Result type alias for collaborator calls.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors from the network collaborator.
///
/// The pipeline collapses every variant to its display string before it
/// reaches the store's error channel, so `Rejected` renders as the bare
/// server message.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, non-success status).
    #[error("request failed: {0}")]
    Http(String),

    /// The server answered with an explicit failure flag.
    #[error("{0}")]
    Rejected(String),

    /// The response body did not carry the expected payload.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_bare_message() {
        let err = ClientError::Rejected("space name already taken".to_string());
        assert_eq!(err.to_string(), "space name already taken");
    }

    #[test]
    fn test_http_display_is_prefixed() {
        let err = ClientError::Http("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}
