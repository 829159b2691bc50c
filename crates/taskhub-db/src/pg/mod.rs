//! PostgreSQL repository implementations

mod task;
mod user;

pub use task::PgTaskRepository;
pub use user::PgUserRepository;

use crate::DbPool;

/// All repositories bundled together
#[derive(Clone)]
pub struct Repositories {
    pub users: PgUserRepository,
    pub tasks: PgTaskRepository,
}

impl Repositories {
    /// Create all repositories from a database pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            tasks: PgTaskRepository::new(pool),
        }
    }
}
