//! Taskhub Types - Shared domain types
//!
//! This crate contains domain types used across Taskhub services:
//! - User and task identifiers
//! - The canonical task status enumeration
//! - The wire-level task representation
//! - Field-scoped validation errors

pub mod task;
pub mod user;
pub mod validation;

pub use task::*;
pub use user::*;
pub use validation::*;
