//! Taskhub Auth Core - Authentication business logic
//!
//! Account registration, Basic-credential exchange for bearer tokens, and
//! per-request token verification.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;
pub mod validate;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::AuthService;
pub use token::{AccessClaims, IssuedToken, TokenKeys};
