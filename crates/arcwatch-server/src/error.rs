//! Server error type and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use arcwatch_core::TracingError;
use arcwatch_provider::ProviderError;

/// Errors surfaced by the HTTP server.
///
/// Note the deliberate split at the boundary: a failing schedule source is
/// *degraded* service and never becomes a `ServerError` — the handler serves
/// empty buckets instead. This type covers startup failures and genuinely
/// internal ones.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid server configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The schedule source could not be constructed.
    #[error("schedule source setup failed: {0}")]
    Provider(#[from] ProviderError),

    /// Tracing initialization failed.
    #[error(transparent)]
    Tracing(#[from] TracingError),

    /// Bind/serve I/O failure.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!(error = %self, "internal server error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal Server Error"})),
        )
            .into_response()
    }
}
