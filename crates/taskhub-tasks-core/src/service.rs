//! Task service - validated, ownership-checked reads and mutations

use std::sync::Arc;

use taskhub_db::{CreateTask, TaskChanges, TaskRepository, TaskRow};
use taskhub_types::{Task, TaskId, UserId};

use crate::{validate, TaskError};

/// Input for creating a task
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    /// Raw status value, parsed against the canonical enumeration
    pub status: Option<String>,
    pub is_archived: Option<bool>,
}

/// Partial update input.
///
/// `description` is doubly optional: the outer `None` means the field was
/// absent from the request (keep the current value), `Some(None)` means an
/// explicit null (clear the field).
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<String>,
    pub is_archived: Option<bool>,
}

/// Task service
///
/// All operations take the authenticated account identifier explicitly;
/// nothing is read from ambient request state.
pub struct TaskService<T: TaskRepository> {
    task_repo: Arc<T>,
}

impl<T: TaskRepository> TaskService<T> {
    /// Create a new task service
    pub fn new(task_repo: Arc<T>) -> Self {
        Self { task_repo }
    }

    /// List all tasks owned by the account, newest first
    pub async fn list(&self, owner: UserId) -> Result<Vec<Task>, TaskError> {
        let rows = self.task_repo.find_by_owner(owner.0).await?;
        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    /// Create a task owned by the account
    pub async fn create(&self, owner: UserId, input: NewTask) -> Result<Task, TaskError> {
        let mut errors = Vec::new();

        let title = validate::validate_title(&input.title, &mut errors);
        let description = input
            .description
            .as_deref()
            .and_then(|d| validate::validate_description(d, &mut errors));
        let status = match input.status.as_deref() {
            Some(s) => validate::parse_status(s, &mut errors),
            None => Default::default(),
        };

        if !errors.is_empty() {
            return Err(TaskError::Validation(errors));
        }

        let row = self
            .task_repo
            .create(CreateTask {
                user_id: owner.0,
                title,
                description,
                status,
                is_archived: input.is_archived.unwrap_or(false),
            })
            .await?;

        tracing::debug!(task_id = row.id, user_id = owner.0, "Task created");
        Ok(row.into_task())
    }

    /// Apply a partial update to a task owned by the account.
    ///
    /// The checks run in a fixed order: existence, then ownership, then
    /// field validation. A non-owner gets 403 rather than 404 once the task
    /// is known to exist; signalling the difference is a deliberate policy.
    pub async fn update(
        &self,
        owner: UserId,
        id: TaskId,
        patch: TaskPatch,
    ) -> Result<Task, TaskError> {
        let existing = self
            .task_repo
            .find_by_id(id.0)
            .await?
            .ok_or(TaskError::NotFound)?;

        if existing.user_id != owner.0 {
            tracing::debug!(task_id = id.0, user_id = owner.0, "Ownership check failed");
            return Err(TaskError::Forbidden);
        }

        let mut errors = Vec::new();

        let title = match patch.title.as_deref() {
            Some(t) => validate::validate_title(t, &mut errors),
            None => existing.title.clone(),
        };
        let description = match &patch.description {
            // Field absent: keep the stored value.
            None => existing.description.clone(),
            // Explicit null: clear.
            Some(None) => None,
            Some(Some(d)) => validate::validate_description(d, &mut errors),
        };
        let status = match patch.status.as_deref() {
            Some(s) => validate::parse_status(s, &mut errors),
            None => existing.task_status(),
        };
        let is_archived = patch.is_archived.unwrap_or(existing.is_archived);

        if !errors.is_empty() {
            return Err(TaskError::Validation(errors));
        }

        let row = self
            .task_repo
            .update(
                id.0,
                TaskChanges {
                    title,
                    description,
                    status,
                    is_archived,
                },
            )
            .await?;

        Ok(row.into_task())
    }
}

impl<T: TaskRepository> std::fmt::Debug for TaskService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService").finish_non_exhaustive()
    }
}
