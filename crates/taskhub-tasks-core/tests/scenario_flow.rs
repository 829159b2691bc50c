//! End-to-end flow: register, exchange credentials, create and update a task

mod common;

use std::sync::Arc;

use common::mock_repos::{MockTaskRepository, MockUserRepository};
use taskhub_auth_core::{AuthConfig, AuthService};
use taskhub_tasks_core::{NewTask, TaskError, TaskPatch, TaskService};
use taskhub_types::TaskStatus;

#[tokio::test]
async fn test_register_token_create_update_flow() {
    let config = AuthConfig::try_new("test-secret-that-is-long-enough!!").unwrap();
    let auth = AuthService::new(config, Arc::new(MockUserRepository::new()));
    let tasks = TaskService::new(Arc::new(MockTaskRepository::new()));

    // Register and exchange credentials for a bearer token.
    let user_id = auth.register("a@b.com", "password123").await.unwrap();
    let issued = auth.issue_token("a@b.com", "password123").await.unwrap();
    assert_eq!(issued.token_type, "Bearer");

    // The gate resolves the token back to the registered account.
    let resolved = auth.authenticate(&issued.token).unwrap();
    assert_eq!(resolved, user_id);

    // Create a task with defaults.
    let task = tasks
        .create(
            resolved,
            NewTask {
                title: "Buy milk".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(task.status, TaskStatus::Todo);
    assert!(!task.is_archived);
    assert_eq!(task.user_id, user_id);

    // Partial update flips only the status.
    let updated = tasks
        .update(
            resolved,
            task.id,
            TaskPatch {
                status: Some("DONE".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, TaskStatus::Done);
    assert_eq!(updated.title, "Buy milk");

    // An unknown status reports a field-scoped validation error.
    let err = tasks
        .update(
            resolved,
            task.id,
            TaskPatch {
                status: Some("NOT_A_STATUS".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    let TaskError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors[0].field, "status");
}
