//! Mock repositories for testing

// Not every test binary exercises both repositories.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use taskhub_db::{
    CreateTask, CreateUser, DbError, DbResult, TaskChanges, TaskRepository, TaskRow,
    UserRepository, UserRow,
};

/// In-memory task repository for testing
#[derive(Default, Clone)]
pub struct MockTaskRepository {
    tasks: Arc<DashMap<i64, TaskRow>>,
    next_id: Arc<AtomicI64>,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<TaskRow>> {
        Ok(self.tasks.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_owner(&self, user_id: i64) -> DbResult<Vec<TaskRow>> {
        let mut rows: Vec<TaskRow> = self
            .tasks
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect();
        // Same stable newest-first ordering the SQL query produces.
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn create(&self, task: CreateTask) -> DbResult<TaskRow> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = TaskRow {
            id,
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            status: task.status.as_str().to_string(),
            is_archived: task.is_archived,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.tasks.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> DbResult<TaskRow> {
        let mut row = self.tasks.get_mut(&id).ok_or(DbError::NotFound)?;
        row.title = changes.title;
        row.description = changes.description;
        row.status = changes.status.as_str().to_string();
        row.is_archived = changes.is_archived;
        row.updated_at = Utc::now();
        Ok(row.value().clone())
    }
}

/// In-memory user repository for testing
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<i64, UserRow>>,
    by_email: Arc<DashMap<String, i64>>,
    next_id: Arc<AtomicI64>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        if self.by_email.contains_key(&user.email) {
            return Err(DbError::UniqueViolation);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = UserRow {
            id,
            email: user.email.clone(),
            password_hash: user.password_hash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.by_email.insert(user.email, id);
        self.users.insert(id, row.clone());
        Ok(row)
    }
}
