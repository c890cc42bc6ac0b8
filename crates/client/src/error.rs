//! Client error types

use thiserror::Error;

/// Errors raised while constructing a client
///
/// Request-path failures never surface here; those are folded into
/// [`crate::ApiResponse::Error`] by the request pipeline.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Underlying HTTP client could not be built
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}
