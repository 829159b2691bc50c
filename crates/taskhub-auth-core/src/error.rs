//! Auth errors

use thiserror::Error;

use taskhub_types::FieldError;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No credential was presented, or the scheme was not recognized
    #[error("authentication required")]
    MissingCredentials,

    /// Unknown email or wrong password. The two cases are deliberately
    /// indistinguishable to the caller.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Invalid token (malformed, bad signature, etc.)
    #[error("invalid token")]
    InvalidToken,

    /// Token has expired
    #[error("token expired")]
    TokenExpired,

    /// An account with this email already exists
    #[error("email already registered")]
    EmailTaken,

    /// Registration input violated one or more rules
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<taskhub_db::DbError> for AuthError {
    fn from(err: taskhub_db::DbError) -> Self {
        match err {
            taskhub_db::DbError::UniqueViolation => Self::EmailTaken,
            other => {
                tracing::error!("Database error: {}", other);
                Self::Database(other.to_string())
            }
        }
    }
}
