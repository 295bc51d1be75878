//! Error types for the stroke aggregation store and its application boundary.

use thiserror::Error;

/// Store-level failures raised while applying a mutation.
///
/// Mutations report these instead of panicking; the hub logs them and the
/// transport caller is free to ignore the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Malformed roster: {0}")]
    MalformedRoster(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// Application-level errors (configuration, session files, CLI)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
