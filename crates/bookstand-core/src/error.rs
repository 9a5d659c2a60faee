use thiserror::Error;

/// Errors surfaced by [`crate::api::BookstoreApi`] calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status. The response body is
    /// kept for the log but deliberately left out of the display text.
    #[error("server returned HTTP {status}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("unexpected response body: {0}")]
    InvalidBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_ignores_body() {
        let err = ApiError::Status {
            status: 500,
            message: "<html>stack trace</html>".to_string(),
        };
        assert_eq!(err.to_string(), "server returned HTTP 500");
    }

    #[test]
    fn test_invalid_body_display() {
        let err = ApiError::InvalidBody("expected an array".to_string());
        assert_eq!(err.to_string(), "unexpected response body: expected an array");
    }
}
