//! Service failures rendered as outward responses.

use crate::in_memory::helpers::{app, create_task, due_date, register};
use rstest::rstest;
use taskdesk::api::{ApiError, TasksResponse, UserResponse};
use taskdesk::app::App;
use taskdesk::task::dto::CreateTaskDto;
use taskdesk::user::dto::CreateUserDto;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_becomes_conflict(app: App) {
    register(&app, "alice").await;

    let err: ApiError = app
        .users()
        .create_user(CreateUserDto::new("alice2", "alice@example.com", "password123"))
        .await
        .expect_err("duplicate email should be rejected")
        .into();

    assert_eq!(err.status_code(), 409);
    assert!(err.to_response().error.contains("alice@example.com"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_email_becomes_bad_request(app: App) {
    let err: ApiError = app
        .users()
        .create_user(CreateUserDto::new("alice", "nope", "password123"))
        .await
        .expect_err("invalid email should be rejected")
        .into();

    assert_eq!(err.status_code(), 400);
    assert!(err.message().contains("email"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_owner_becomes_internal_error(app: App) {
    let err: ApiError = app
        .tasks()
        .create_task(CreateTaskDto::new("Unobody", "Orphan", due_date()))
        .await
        .expect_err("unknown owner should be rejected")
        .into();

    assert_eq!(err.status_code(), 500);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn user_and_task_envelopes_serialize(app: App) {
    let alice = register(&app, "alice").await;
    create_task(&app, &alice, "Report").await;

    let user_json =
        serde_json::to_value(UserResponse::from(alice.clone())).expect("user should serialize");
    assert_eq!(user_json["username"], "alice");
    assert!(user_json.get("password").is_none());

    let tasks = app
        .tasks()
        .get_tasks_by_user_id(&alice.id)
        .await
        .expect("owner listing should succeed");
    let tasks_json =
        serde_json::to_value(TasksResponse::from(tasks)).expect("tasks should serialize");
    assert_eq!(tasks_json["tasks"][0]["status"], "pending");
    assert_eq!(tasks_json["tasks"][0]["due_date"], "2025-01-10");
}
