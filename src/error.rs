//! Error types for BibliOn server
//!
//! Internally errors are typed ([`AppError`]). On the wire every failure is an
//! HTTP 400 carrying a fixed Portuguese message chosen by the endpoint
//! ([`ApiError`]), so callers never see whether validation or the database
//! failed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Body of every failure response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub mensagem: String,
}

/// Messages an endpoint answers with when it fails
#[derive(Debug, Clone, Copy)]
pub struct FailureMessages {
    /// The store refused the operation: no row touched, or the database errored
    pub rejected: &'static str,
    /// The request never reached the store: body, id or validation failure
    pub failed: &'static str,
}

impl FailureMessages {
    pub const fn same(message: &'static str) -> Self {
        Self {
            rejected: message,
            failed: message,
        }
    }
}

/// Error returned by HTTP handlers: a fixed message plus the logged cause
#[derive(Debug)]
pub struct ApiError {
    pub message: &'static str,
    pub source: AppError,
}

impl ApiError {
    pub fn new(message: &'static str, source: AppError) -> Self {
        Self { message, source }
    }
}

impl AppError {
    /// Attach the endpoint's client-facing message
    pub fn respond_with(self, messages: FailureMessages) -> ApiError {
        let message = match &self {
            AppError::NotFound(_) | AppError::Database(_) => messages.rejected,
            AppError::Validation(_) | AppError::BadRequest(_) | AppError::Internal(_) => {
                messages.failed
            }
        };
        ApiError::new(message, self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.source {
            AppError::Database(e) => tracing::error!("{} Database error: {:?}", self.message, e),
            other => tracing::error!("{} {}", self.message, other),
        }

        let body = Json(ErrorResponse {
            mensagem: self.message.to_string(),
        });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (StatusCode::BAD_REQUEST, Json(ErrorResponse { mensagem: message })).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;
