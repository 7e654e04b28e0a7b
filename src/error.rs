//! Error types for the portfolio backend.
//!
//! Every failure the API can report is a store failure, so every variant
//! renders as HTTP 500 with the error text in a `message` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Unified error type for store and request handling.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error response body for API clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let body = ErrorResponse {
            message: self.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type alias for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;
