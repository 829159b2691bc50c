//! Authentication handlers (register, token)

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use taskhub_types::UserId;

use crate::error::ApiResult;
use crate::extractors::BasicCredentials;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Missing fields default to empty strings so validation can report them
/// as `required` instead of the body failing to deserialize.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub expires_in: u64,
    pub token_type: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/auth/register
///
/// Create a new account from an email/password pair
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let user_id = state.auth.register(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "account created",
            user_id,
        }),
    ))
}

/// POST /api/auth/token
///
/// Exchange Basic credentials for a signed bearer token
pub async fn token(
    State(state): State<AppState>,
    creds: BasicCredentials,
) -> ApiResult<Json<TokenResponse>> {
    let issued = state.auth.issue_token(&creds.email, &creds.password).await?;

    Ok(Json(TokenResponse {
        token: issued.token,
        expires_in: issued.expires_in,
        token_type: issued.token_type,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_defaults_missing_fields() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.email, "");
        assert_eq!(req.password, "");
    }

    #[test]
    fn test_register_response_shape() {
        let value = serde_json::to_value(RegisterResponse {
            message: "account created",
            user_id: UserId(5),
        })
        .unwrap();
        assert_eq!(value["userId"], 5);
        assert_eq!(value["message"], "account created");
    }

    #[test]
    fn test_token_response_shape() {
        let value = serde_json::to_value(TokenResponse {
            token: "abc".to_string(),
            expires_in: 86_400,
            token_type: "Bearer",
        })
        .unwrap();
        assert_eq!(value["token"], "abc");
        assert_eq!(value["expiresIn"], 86_400);
        assert_eq!(value["tokenType"], "Bearer");
    }
}
