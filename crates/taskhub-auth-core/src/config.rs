//! Configuration types for the auth core

use std::time::Duration;

use crate::AuthError;

/// Auth service configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign bearer tokens
    pub token_secret: String,
    /// How long issued tokens stay valid
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Minimum allowed secret length in bytes (256 bits)
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Create a new auth config with the default 24 hour token lifetime.
    ///
    /// # Errors
    /// Returns an error if the secret is shorter than 32 bytes. There is no
    /// fallback secret: a missing or weak secret must fail startup instead
    /// of silently weakening verification.
    pub fn try_new(token_secret: impl Into<String>) -> Result<Self, AuthError> {
        let token_secret = token_secret.into();
        if token_secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(AuthError::Configuration(format!(
                "token secret must be at least {} bytes, got {}",
                Self::MIN_SECRET_LENGTH,
                token_secret.len()
            )));
        }
        Ok(Self {
            token_secret,
            token_ttl: Duration::from_secs(24 * 60 * 60),
        })
    }

    /// Set token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_secret() {
        let result = AuthConfig::try_new("short");
        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }

    #[test]
    fn test_accepts_long_secret_with_default_ttl() {
        let config = AuthConfig::try_new("s".repeat(32)).unwrap();
        assert_eq!(config.token_ttl, Duration::from_secs(86_400));
    }
}
