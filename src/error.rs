use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Error body returned by every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure talking to the embedding/chat provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider response did not match the expected schema: {0}")]
    Schema(String),
}

impl ProviderError {
    /// Whether the failure is worth retrying: connect/timeout transport
    /// errors, rate limiting, and server-side 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Transport(e) => e.is_timeout() || e.is_connect(),
            ProviderError::Status { status, .. } => {
                *status == 429 || (500..=599).contains(status)
            }
            ProviderError::Schema(_) => false,
        }
    }
}

/// Two embeddings that should be comparable have different lengths.
#[derive(Debug, Error)]
#[error("embedding dimension mismatch: {left} vs {right}")]
pub struct DimensionMismatch {
    pub left: usize,
    pub right: usize,
}

/// Request-level error mapped onto an HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Dimension(#[from] DimensionMismatch),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::BAD_GATEWAY,
            ApiError::Dimension(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
