//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use taskhub_types::{Task, TaskId, TaskStatus, UserId};

/// User row from the database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Task row from the database
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> UserId {
        UserId(self.id)
    }
}

impl TaskRow {
    /// Convert to domain TaskId
    pub fn task_id(&self) -> TaskId {
        TaskId(self.id)
    }

    /// Convert to domain UserId of the owner
    pub fn user_id(&self) -> UserId {
        UserId(self.user_id)
    }

    /// Parsed status column. An unrecognized stored value points at row
    /// corruption or a missed migration; log it before falling back.
    pub fn task_status(&self) -> TaskStatus {
        self.status.parse().unwrap_or_else(|_| {
            tracing::warn!(
                task_id = self.id,
                status = %self.status,
                "Unrecognized stored task status, defaulting to TODO"
            );
            TaskStatus::default()
        })
    }

    /// Convert into the API task representation
    pub fn into_task(self) -> Task {
        let status = self.task_status();
        Task {
            id: TaskId(self.id),
            title: self.title,
            description: self.description,
            status,
            is_archived: self.is_archived,
            user_id: UserId(self.user_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(status: &str) -> TaskRow {
        TaskRow {
            id: 1,
            user_id: 7,
            title: "Buy milk".to_string(),
            description: None,
            status: status.to_string(),
            is_archived: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_stored_status_parses() {
        assert_eq!(row("DONE").task_status(), TaskStatus::Done);
        assert_eq!(row("IN_PROGRESS").task_status(), TaskStatus::InProgress);
    }

    #[test]
    fn test_unrecognized_stored_status_defaults_to_todo() {
        assert_eq!(row("NOT_A_STATUS").task_status(), TaskStatus::Todo);
        assert_eq!(row("").task_status(), TaskStatus::Todo);
    }
}
