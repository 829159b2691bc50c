//! PostgreSQL task repository implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::TaskRow;
use crate::repo::{CreateTask, TaskChanges, TaskRepository};

/// PostgreSQL task repository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    /// Create a new task repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<TaskRow>> {
        let task = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, user_id, title, description, status, is_archived,
                   created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn find_by_owner(&self, user_id: i64) -> DbResult<Vec<TaskRow>> {
        // Stable newest-first ordering; id breaks created_at ties.
        let tasks = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, user_id, title, description, status, is_archived,
                   created_at, updated_at
            FROM tasks
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn create(&self, task: CreateTask) -> DbResult<TaskRow> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO tasks (user_id, title, description, status, is_archived)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, description, status, is_archived,
                      created_at, updated_at
            "#,
        )
        .bind(task.user_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.is_archived)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> DbResult<TaskRow> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks
            SET title = $1, description = $2, status = $3, is_archived = $4,
                updated_at = now()
            WHERE id = $5
            RETURNING id, user_id, title, description, status, is_archived,
                      created_at, updated_at
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.status.as_str())
        .bind(changes.is_archived)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
