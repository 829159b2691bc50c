//! Task handlers (list, create, update)

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Deserializer};

use taskhub_tasks_core::{NewTask, TaskPatch};
use taskhub_types::{Task, TaskId};

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Defaulted so an absent title reports `required` instead of a
    /// deserialization failure.
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub is_archived: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    /// Doubly optional: absent keeps the stored value, an explicit null
    /// clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub status: Option<String>,
    pub is_archived: Option<bool>,
}

/// Deserialize a field that was present, wrapping the (possibly null)
/// value in an outer `Some`. Combined with `#[serde(default)]`, an absent
/// field stays `None`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks
///
/// List every task owned by the authenticated account, newest first
pub async fn list_tasks(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list(user.user_id).await?;
    Ok(Json(tasks))
}

/// POST /api/tasks
///
/// Create a task owned by the authenticated account
pub async fn create_task(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    let task = state
        .tasks
        .create(
            user.user_id,
            NewTask {
                title: req.title,
                description: req.description,
                status: req.status,
                is_archived: req.is_archived,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /api/tasks/{task_id}
///
/// Apply a partial update to a task owned by the authenticated account
pub async fn update_task(
    State(state): State<AppState>,
    user: AuthUser,
    Path(task_id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let task = state
        .tasks
        .update(
            user.user_id,
            TaskId(task_id),
            TaskPatch {
                title: req.title,
                description: req.description,
                status: req.status,
                is_archived: req.is_archived,
            },
        )
        .await?;

    Ok(Json(task))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_distinguishes_absent_from_null() {
        let absent: UpdateTaskRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.description, None);

        let null: UpdateTaskRequest = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(null.description, Some(None));

        let value: UpdateTaskRequest =
            serde_json::from_str(r#"{"description": "two liters"}"#).unwrap();
        assert_eq!(value.description, Some(Some("two liters".to_string())));
    }

    #[test]
    fn test_update_request_uses_camel_case_keys() {
        let req: UpdateTaskRequest = serde_json::from_str(r#"{"isArchived": true}"#).unwrap();
        assert_eq!(req.is_archived, Some(true));
        assert_eq!(req.title, None);
    }

    #[test]
    fn test_create_request_defaults_title() {
        let req: CreateTaskRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.title, "");
        assert_eq!(req.status, None);
        assert_eq!(req.is_archived, None);
    }

    #[test]
    fn test_create_request_accepts_full_payload() {
        let req: CreateTaskRequest = serde_json::from_str(
            r#"{"title": "Buy milk", "description": "two liters", "status": "TODO", "isArchived": false}"#,
        )
        .unwrap();
        assert_eq!(req.title, "Buy milk");
        assert_eq!(req.description.as_deref(), Some("two liters"));
        assert_eq!(req.status.as_deref(), Some("TODO"));
        assert_eq!(req.is_archived, Some(false));
    }
}
