//! Error handling - maps failures to the `{message, status, timestamp}`
//! error body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use plank_shared::ErrorResponse;
use std::fmt;

/// Application-level error type. Everything a handler can fail with.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    UnsupportedStrategy(String),
    NotFound(i64),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Invalid request: {}", msg),
            AppError::UnsupportedStrategy(msg) => write!(f, "{}", msg),
            AppError::NotFound(id) => write!(f, "Post not found. id: {}", id),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::UnsupportedStrategy(_)
            | AppError::NotFound(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Internal(detail) => {
                // Log internal detail, never expose it
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
            other => ErrorResponse::bad_request(other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<plank_core::error::DomainError> for AppError {
    fn from(err: plank_core::error::DomainError) -> Self {
        match err {
            plank_core::error::DomainError::NotFound(id) => AppError::NotFound(id),
            plank_core::error::DomainError::UnsupportedStrategy { .. } => {
                AppError::UnsupportedStrategy(err.to_string())
            }
            plank_core::error::DomainError::Repo(repo_err) => repo_err.into(),
        }
    }
}

impl From<plank_core::error::RepoError> for AppError {
    fn from(err: plank_core::error::RepoError) -> Self {
        match err {
            plank_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            plank_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

// Extractor configs - malformed bodies/queries/paths get the same
// ErrorResponse shape as everything else.

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}
