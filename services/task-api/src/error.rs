//! Error types for the Task API service.
//!
//! Every domain error is translated to a status/body pair here; nothing is
//! retried and storage faults degrade to a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use taskhub_auth_core::AuthError;
use taskhub_tasks_core::TaskError;
use taskhub_types::FieldError;

/// API error response body: `{message}` or, for field-level validation
/// failures, `{message, errors: [{field, message, code}]}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("An account with this email already exists")]
    Conflict,

    #[error("Task not found")]
    NotFound,

    #[error("You do not own this task")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthenticationRequired | Self::InvalidCredentials | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            Self::Validation(errors) => ErrorBody {
                message: "Validation failed".to_string(),
                errors: Some(errors),
            },
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "Internal API error");
                // The underlying message is surfaced only in debug builds.
                let message = if cfg!(debug_assertions) {
                    detail
                } else {
                    "Internal server error".to_string()
                };
                ErrorBody {
                    message,
                    errors: None,
                }
            }
            other => ErrorBody {
                message: other.to_string(),
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials => Self::AuthenticationRequired,
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            AuthError::InvalidToken | AuthError::TokenExpired => Self::InvalidToken,
            AuthError::EmailTaken => Self::Conflict,
            AuthError::Validation(errors) => Self::Validation(errors),
            AuthError::Database(e) | AuthError::Configuration(e) | AuthError::Internal(e) => {
                Self::Internal(e)
            }
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound => Self::NotFound,
            TaskError::Forbidden => Self::Forbidden,
            TaskError::Validation(errors) => Self::Validation(errors),
            TaskError::Database(e) => Self::Internal(e),
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
