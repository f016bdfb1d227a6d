use reqwest::StatusCode;
use thiserror::Error;

/// One error kind per operation family. Any non-2xx status collapses into
/// the family's variant; 4xx and 5xx are not distinguished and backend
/// error bodies are never parsed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GET {path} failed with status {status}")]
    Request { path: String, status: StatusCode },

    #[error("fetch from {path} failed with status {status}")]
    Fetch { path: String, status: StatusCode },

    #[error("update of {path} failed with status {status}")]
    Update { path: String, status: StatusCode },

    #[error("authorization code exchange failed with status {status}")]
    TokenExchange { status: StatusCode },

    /// A 2xx response whose body does not match the endpoint's schema.
    #[error("malformed response from {path}: {reason}")]
    Schema { path: String, reason: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
