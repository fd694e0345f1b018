//! HTTP error handling and response conversion.
//!
//! Application errors are mapped to HTTP status codes and fixed JSON bodies
//! at the handler boundary. Internal detail (driver messages, SQL state) is
//! logged server-side and never included in a response.

use crate::domain::suggestion::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
///
/// Each variant maps to a specific HTTP status code and a user-safe message.
#[derive(Debug)]
pub enum AppError {
    /// Request validation failed (400).
    BadRequest(String),

    /// Database operation failed (500).
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::Database(_) => "Failed to fetch suggestions".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        // Client mistakes are expected traffic; only downstream failures are
        // logged as errors.
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            _ => {
                tracing::debug!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InfrastructureError(msg) => AppError::Database(msg),
        }
    }
}
