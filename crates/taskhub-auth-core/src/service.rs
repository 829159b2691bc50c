//! Auth service - ties together registration, credential exchange, and
//! bearer token verification

use std::sync::Arc;

use taskhub_db::{CreateUser, UserRepository};
use taskhub_types::UserId;

use crate::{
    config::AuthConfig,
    password,
    token::{IssuedToken, TokenKeys},
    validate, AuthError,
};

/// Authentication service
///
/// Provides unified interface for:
/// - Account registration (validate, hash, persist)
/// - Credential exchange (email/password for a signed bearer token)
/// - Per-request token verification
pub struct AuthService<U: UserRepository> {
    config: AuthConfig,
    keys: TokenKeys,
    user_repo: Arc<U>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new auth service
    pub fn new(config: AuthConfig, user_repo: Arc<U>) -> Self {
        let keys = TokenKeys::new(&config.token_secret, config.token_ttl);
        Self {
            keys,
            user_repo,
            config,
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a new account and return its identifier.
    ///
    /// The plaintext password is hashed on the blocking pool and never
    /// stored or returned. The unique index on email is the final arbiter
    /// for concurrent registrations of the same address.
    pub async fn register(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        validate::validate_registration(email, password).map_err(AuthError::Validation)?;

        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = {
            let password = password.to_owned();
            tokio::task::spawn_blocking(move || password::hash_password(&password))
                .await
                .map_err(|e| AuthError::Internal(format!("hashing task failed: {e}")))??
        };

        let user = self
            .user_repo
            .create(CreateUser {
                email: email.to_owned(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.user_id(), "Account registered");
        Ok(user.user_id())
    }

    // =========================================================================
    // Token Issuance
    // =========================================================================

    /// Exchange an email/password pair for a signed bearer token.
    ///
    /// Unknown email and wrong password fail with the same error so the
    /// response does not reveal which part was wrong.
    pub async fn issue_token(&self, email: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        let user_id = user.user_id();
        let verified = {
            let password = password.to_owned();
            let hash = user.password_hash;
            tokio::task::spawn_blocking(move || password::verify_password(&password, &hash))
                .await
                .map_err(|e| AuthError::Internal(format!("verification task failed: {e}")))?
        };

        if !verified {
            return Err(AuthError::InvalidCredentials);
        }

        self.keys.issue(user_id)
    }

    // =========================================================================
    // Token Verification
    // =========================================================================

    /// Verify a bearer token and resolve the account it asserts.
    ///
    /// No identity is cached across requests; every call re-verifies the
    /// signature and expiry.
    pub fn authenticate(&self, token: &str) -> Result<UserId, AuthError> {
        self.keys.verify(token)
    }
}

impl<U: UserRepository> std::fmt::Debug for AuthService<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("config", &self.config)
            .finish()
    }
}
