//! Task lifecycle through the assembled backend.

use crate::in_memory::helpers::{app, create_task, due_date, register};
use rstest::rstest;
use taskdesk::app::App;
use taskdesk::error::ErrorKind;
use taskdesk::task::domain::{TaskId, TaskStatus};
use taskdesk::task::dto::{CreateTaskDto, UpdateTaskDto};
use taskdesk::user::domain::UserId;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_tasks_start_pending_whatever_the_draft_says(app: App) {
    let alice = register(&app, "alice").await;

    let task = app
        .tasks()
        .create_task(
            CreateTaskDto::new(alice.id.as_str(), "Write report", due_date())
                .with_description("Quarterly numbers")
                .with_status("completed"),
        )
        .await
        .expect("task creation should succeed");

    assert!(task.id.as_str().starts_with('T'));
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.user_id, alice.id);
    assert_eq!(task.description, "Quarterly numbers");
    assert_eq!(task.created_at, task.updated_at);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_for_unknown_user_is_rejected(app: App) {
    let err = app
        .tasks()
        .create_task(CreateTaskDto::new("Unobody", "Orphan", due_date()))
        .await
        .expect_err("unknown owner should be rejected");

    assert_eq!(err.kind(), ErrorKind::UserNotFound);
    let listed = app.tasks().get_tasks("").await.expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_selects_matching_tasks(app: App) {
    let alice = register(&app, "alice").await;
    let first = create_task(&app, &alice, "First").await;
    let second = create_task(&app, &alice, "Second").await;

    app.tasks()
        .update_task(UpdateTaskDto::new(
            second.id.as_str(),
            "Second",
            "completed",
            due_date(),
        ))
        .await
        .expect("update should succeed");

    let pending = app
        .tasks()
        .get_tasks("pending")
        .await
        .expect("filtered listing should succeed");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, first.id);

    let completed = app
        .tasks()
        .get_tasks("completed")
        .await
        .expect("filtered listing should succeed");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, second.id);

    let everything = app.tasks().get_tasks("").await.expect("listing should succeed");
    assert_eq!(everything.len(), 2);

    let err = app
        .tasks()
        .get_tasks("archived")
        .await
        .expect_err("unknown status should be rejected");
    assert_eq!(err.kind(), ErrorKind::InvalidStatus);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_fields_and_keeps_identity(app: App) {
    let alice = register(&app, "alice").await;
    let created = create_task(&app, &alice, "Draft").await;
    let new_due = due_date().succ_opt().expect("next day exists");

    let updated = app
        .tasks()
        .update_task(
            UpdateTaskDto::new(created.id.as_str(), "Final", "in_progress", new_due)
                .with_description("Now with detail"),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.user_id, alice.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description, "Now with detail");
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.due_date, new_due);

    let fetched = app
        .tasks()
        .get_task(&created.id)
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, updated);
}

#[rstest]
#[case("", "in_progress", Some(()))]
#[case("Title", "done", Some(()))]
#[case("Title", "pending", None)]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_replacement_leaves_task_untouched(
    app: App,
    #[case] title: &str,
    #[case] status: &str,
    #[case] due: Option<()>,
) {
    let alice = register(&app, "alice").await;
    let created = create_task(&app, &alice, "Original").await;

    let mut replacement = UpdateTaskDto::new(created.id.as_str(), title, status, due_date());
    replacement.due_date = due.map(|()| due_date());

    let err = app
        .tasks()
        .update_task(replacement)
        .await
        .expect_err("invalid replacement should be rejected");

    assert_eq!(err.kind(), ErrorKind::InvalidTask);
    let fetched = app
        .tasks()
        .get_task(&created.id)
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_task_is_not_found(app: App) {
    let err = app
        .tasks()
        .update_task(UpdateTaskDto::new(
            "Tmissing",
            "Title",
            "pending",
            due_date(),
        ))
        .await
        .expect_err("unknown task should not be found");

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_are_listed_per_owner(app: App) {
    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;
    let alices = create_task(&app, &alice, "Alice's").await;
    create_task(&app, &bob, "Bob's").await;

    let listed = app
        .tasks()
        .get_tasks_by_user_id(&alice.id)
        .await
        .expect("owner listing should succeed");
    assert_eq!(listed, vec![alices]);

    let carol = register(&app, "carol").await;
    let empty = app
        .tasks()
        .get_tasks_by_user_id(&carol.id)
        .await
        .expect("owner listing should succeed");
    assert!(empty.is_empty());

    let err = app
        .tasks()
        .get_tasks_by_user_id(&UserId::from("Ughost"))
        .await
        .expect_err("unknown owner should be rejected");
    assert_eq!(err.kind(), ErrorKind::UserNotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_gone(app: App) {
    let alice = register(&app, "alice").await;
    let task = create_task(&app, &alice, "Ephemeral").await;

    app.tasks()
        .delete_task(&task.id)
        .await
        .expect("delete should succeed");

    let err = app
        .tasks()
        .get_task(&task.id)
        .await
        .expect_err("deleted task should not be found");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let again = app
        .tasks()
        .delete_task(&TaskId::from("Tmissing"))
        .await
        .expect_err("unknown task delete should fail");
    assert_eq!(again.kind(), ErrorKind::NotFound);
}
