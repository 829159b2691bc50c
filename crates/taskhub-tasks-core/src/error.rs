//! Task errors

use thiserror::Error;

use taskhub_types::FieldError;

/// Task mutation errors
#[derive(Error, Debug)]
pub enum TaskError {
    /// No task with the given identifier exists
    #[error("task not found")]
    NotFound,

    /// The task exists but belongs to another account. Only reachable
    /// after existence is confirmed.
    #[error("task belongs to another user")]
    Forbidden,

    /// The payload violated one or more field rules
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Database error
    #[error("database error: {0}")]
    Database(String),
}

impl From<taskhub_db::DbError> for TaskError {
    fn from(err: taskhub_db::DbError) -> Self {
        match err {
            taskhub_db::DbError::NotFound => Self::NotFound,
            other => {
                tracing::error!("Database error: {}", other);
                Self::Database(other.to_string())
            }
        }
    }
}
