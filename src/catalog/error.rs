//! Errors raised while loading the catalog.

use thiserror::Error;

/// The catalog could not be loaded. Never retried; the UI shows
/// [`LoadError::user_message`] in place of the table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Could not reach the endpoint.
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout.
    #[error("Request to '{url}' timed out after {seconds}s")]
    Timeout { url: String, seconds: u64 },

    /// Endpoint answered with a non-success status.
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Body was not a JSON array of products.
    #[error("Could not decode products from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl LoadError {
    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::Connection { .. } => "Could not reach the product service",
            LoadError::Timeout { .. } => "The product service did not answer in time",
            LoadError::Status { .. } => "The product service returned an error",
            LoadError::Decode { .. } => "The product data could not be read",
        }
    }

    /// Short machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Connection { .. } => "connection",
            LoadError::Timeout { .. } => "timeout",
            LoadError::Status { .. } => "status",
            LoadError::Decode { .. } => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_url() {
        let err = LoadError::Status {
            url: "http://localhost/api".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "'http://localhost/api' returned HTTP 503");
        assert_eq!(err.kind(), "status");
        assert_eq!(err.user_message(), "The product service returned an error");
    }

    #[test]
    fn timeout_error_mentions_duration() {
        let err = LoadError::Timeout {
            url: "http://localhost/api".to_string(),
            seconds: 3,
        };
        assert!(err.to_string().contains("3s"));
        assert_eq!(err.kind(), "timeout");
    }
}
