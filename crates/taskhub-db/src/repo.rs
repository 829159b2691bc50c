//! Repository traits
//!
//! Define async repository interfaces for database operations.

use async_trait::async_trait;

use taskhub_types::TaskStatus;

use crate::error::DbResult;
use crate::models::{TaskRow, UserRow};

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> DbResult<Option<UserRow>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// Create a new user
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}

/// Task repository trait
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find a task by ID
    async fn find_by_id(&self, id: i64) -> DbResult<Option<TaskRow>>;

    /// Find all tasks owned by a user, newest first
    async fn find_by_owner(&self, user_id: i64) -> DbResult<Vec<TaskRow>>;

    /// Create a new task
    async fn create(&self, task: CreateTask) -> DbResult<TaskRow>;

    /// Apply a full field set to a task and refresh its updated_at
    async fn update(&self, id: i64, changes: TaskChanges) -> DbResult<TaskRow>;
}

/// Create task input
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub is_archived: bool,
}

/// Replacement field set applied by `TaskRepository::update`.
///
/// Merging of partial input with the existing row happens in the task
/// service, so the repository always writes every mutable column.
#[derive(Debug, Clone)]
pub struct TaskChanges {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub is_archived: bool,
}
