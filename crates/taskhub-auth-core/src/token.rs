//! Bearer token issuance and verification
//!
//! Tokens are compact HS256 JWTs asserting an account identifier with a
//! fixed expiry window. Keys are derived once from the configured secret.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use taskhub_types::UserId;

use crate::AuthError;

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (account identifier)
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// A freshly issued bearer token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The signed token
    pub token: String,
    /// Remaining lifetime in seconds
    pub expires_in: u64,
    /// Intended usage scheme
    pub token_type: &'static str,
}

/// Signing and verification keys for bearer tokens
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    /// Derive keys from the configured secret
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a signed token asserting the given account identifier
    pub fn issue(&self, user_id: UserId) -> Result<IssuedToken, AuthError> {
        let now = Utc::now().timestamp();
        let expires_in = self.ttl.as_secs();
        let claims = AccessClaims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + expires_in as i64,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_in,
            token_type: "Bearer",
        })
    }

    /// Verify a token's signature and expiry, returning the asserted account
    pub fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<AccessClaims>(token, &self.decoding, &validation).map_err(|e| {
            tracing::debug!("Token validation failed: {}", e);
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        UserId::parse(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new(&"k".repeat(32), Duration::from_secs(24 * 3600))
    }

    #[test]
    fn test_issue_then_verify() {
        let keys = keys();
        let issued = keys.issue(UserId(42)).unwrap();
        assert_eq!(issued.token_type, "Bearer");
        assert_eq!(issued.expires_in, 24 * 3600);

        let user_id = keys.verify(&issued.token).unwrap();
        assert_eq!(user_id, UserId(42));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issued = keys().issue(UserId(1)).unwrap();
        let other = TokenKeys::new(&"x".repeat(32), Duration::from_secs(3600));
        assert!(matches!(
            other.verify(&issued.token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let keys = keys();
        let now = Utc::now().timestamp();
        // Expired well past the default leeway.
        let claims = AccessClaims {
            sub: "42".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding).unwrap();
        assert!(matches!(keys.verify(&token), Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_verify_rejects_malformed_token() {
        assert!(matches!(
            keys().verify("not.a.token"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(keys().verify(""), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_non_numeric_subject() {
        let keys = keys();
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: "not-a-number".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding).unwrap();
        assert!(matches!(keys.verify(&token), Err(AuthError::InvalidToken)));
    }
}
