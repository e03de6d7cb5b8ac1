//! Search adapter error types.

use thiserror::Error;

/// Errors returned by a single provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The API key is not configured; no request was sent.
    #[error("{key} is not set")]
    MissingCredential { key: &'static str },

    /// The provider answered with a non-success status, or the request
    /// could not be completed. `status` is `None` for transport failures.
    #[error("Brave API {}: {body}", describe_status(.status))]
    Upstream { status: Option<u16>, body: String },
}

impl SearchError {
    /// Create an upstream error for a non-success HTTP status.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status: Some(status),
            body: body.into(),
        }
    }

    /// Create an upstream error for a failed or undecodable exchange.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Upstream {
            status: None,
            body: msg.into(),
        }
    }
}

/// Render an optional HTTP status for error messages.
pub(crate) fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "request failed".to_string(),
    }
}

/// Errors raised while constructing the search client.
#[derive(Debug, Error)]
pub enum SearchClientError {
    /// The configured base URL cannot be parsed.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
