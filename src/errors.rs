/*!
 * Error types for the translation gateway.
 *
 * This module contains custom error types for different parts of the service,
 * using the thiserror crate for ergonomic error definitions.
 */

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur when talking to an upstream provider API.
///
/// The retry classification lives here: the transport adapter decides the
/// error kind from the HTTP status and failure mode, so downstream code
/// never inspects message text to find out whether a retry makes sense.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails before a response arrives
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Non-success status returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection, including timeouts
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Quota or rate budget exhausted on the provider side
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

impl ProviderError {
    /// Whether the retry controller may attempt this call again.
    ///
    /// Authentication and quota failures will not heal between attempts,
    /// so they abort the retry loop immediately.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            Self::AuthenticationError(_) | Self::QuotaExceeded(_)
        )
    }
}

/// Errors raised while loading or validating startup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required secret is absent from the environment
    #[error("Missing required configuration: {0}")]
    MissingKey(&'static str),

    /// A configured value failed validation
    #[error("Invalid configuration value for {field}: {message}")]
    InvalidValue {
        /// Name of the offending setting
        field: &'static str,
        /// What was wrong with it
        message: String,
    },
}

/// Errors surfaced at the HTTP boundary.
///
/// Validation failures become 422 responses with field detail; anything
/// unexpected becomes a generic 500. Pipeline failures never take this
/// path - handlers fold them into `success: false` payloads instead.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or empty input, rejected before reaching the pipeline
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// Request field that failed validation
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// Any other error reaching the handler boundary
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "success": false,
                    "error": message,
                    "field": field,
                }),
            ),
            Self::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "error": message,
                }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        Self::Internal(error.to_string())
    }
}
