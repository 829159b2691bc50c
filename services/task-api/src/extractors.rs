//! Axum extractors for authentication
//!
//! `AuthUser` is the request authentication gate: every task handler takes
//! it as an argument, and the resolved account identifier flows from there
//! explicitly through the call chain. `BasicCredentials` parses the
//! one-time credential-exchange header.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::header;
use axum::http::request::Parts;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use taskhub_types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a bearer token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(parts)?;

        let user_id = app_state.auth.authenticate(token).map_err(|e| {
            tracing::debug!(error = ?e, "Token verification failed");
            ApiError::from(e)
        })?;

        Ok(AuthUser { user_id })
    }
}

/// Extract a bearer token from the Authorization header
fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(ApiError::AuthenticationRequired)
}

/// Basic credentials parsed from the Authorization header
///
/// The header carries `Basic base64(email:password)`. Any deviation from
/// that shape rejects with 401 before a store call is made.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

impl<S> FromRequestParts<S> for BasicCredentials
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let encoded = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Basic "))
            .ok_or(ApiError::AuthenticationRequired)?;

        let decoded = BASE64
            .decode(encoded)
            .map_err(|_| ApiError::AuthenticationRequired)?;
        let decoded =
            String::from_utf8(decoded).map_err(|_| ApiError::AuthenticationRequired)?;

        // Passwords may contain colons; split on the first one only.
        let (email, password) = decoded
            .split_once(':')
            .ok_or(ApiError::AuthenticationRequired)?;

        Ok(BasicCredentials {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}
