//! Application state

use std::ops::Deref;
use std::sync::Arc;

use taskhub_auth_core::AuthService;
use taskhub_db::pg::{PgTaskRepository, PgUserRepository};
use taskhub_db::DbPool;
use taskhub_tasks_core::TaskService;

/// Type alias for the auth service with the concrete repository type
pub type AuthServiceImpl = AuthService<PgUserRepository>;

/// Type alias for the task service with the concrete repository type
pub type TaskServiceImpl = TaskService<PgTaskRepository>;

/// Shared database pool wrapper for health checks
#[derive(Clone)]
pub struct SharedPool(Arc<DbPool>);

impl Deref for SharedPool {
    type Target = DbPool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth service for registration, token issuance, and verification
    pub auth: Arc<AuthServiceImpl>,
    /// Task service for ownership-checked task CRUD
    pub tasks: Arc<TaskServiceImpl>,
    /// Database connection pool (shared reference for health checks)
    pub pool: SharedPool,
}

impl AppState {
    /// Create new application state
    pub fn new(auth: AuthServiceImpl, tasks: TaskServiceImpl, pool: DbPool) -> Self {
        Self {
            auth: Arc::new(auth),
            tasks: Arc::new(tasks),
            pool: SharedPool(Arc::new(pool)),
        }
    }
}
