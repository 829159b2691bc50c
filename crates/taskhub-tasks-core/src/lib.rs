//! Taskhub Tasks Core - Task mutation business logic
//!
//! Validated, ownership-checked list/create/update over the task store.

pub mod error;
pub mod service;
pub mod validate;

pub use error::TaskError;
pub use service::{NewTask, TaskPatch, TaskService};
