//! Taskhub DB - Database abstractions
//!
//! SQLx-based database layer for Taskhub services.
//!
//! # Example
//!
//! ```rust,ignore
//! use taskhub_db::{create_pool, PoolSettings, Repositories};
//!
//! let pool = create_pool("postgres://localhost/taskhub", PoolSettings::default()).await?;
//! let repos = Repositories::new(pool);
//!
//! // Use repositories
//! let user = repos.users.find_by_email("user@example.com").await?;
//! ```

pub mod error;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pg::Repositories;
pub use pool::{create_pool, DbPool, PoolSettings};
pub use repo::*;
