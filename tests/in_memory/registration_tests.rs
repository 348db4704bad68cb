//! Registration and lookup through the assembled backend.

use std::collections::HashSet;
use std::sync::Arc;

use crate::in_memory::helpers::{app, register, registration};
use rstest::rstest;
use taskdesk::app::App;
use taskdesk::error::ErrorKind;
use taskdesk::user::domain::UserId;
use taskdesk::user::dto::CreateUserDto;
use taskdesk::user::services::UserServiceError;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_user_can_be_fetched_and_listed(app: App) {
    let alice = register(&app, "alice").await;

    assert!(alice.id.as_str().starts_with('U'));
    assert_eq!(alice.id.as_str().len(), 33);
    assert_eq!(alice.created_at, alice.updated_at);

    let fetched = app
        .users()
        .get_user(&alice.id)
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, alice);

    let listed = app.users().list_users().await.expect("listing should succeed");
    assert_eq!(listed, vec![alice]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_registration_with_same_email_conflicts(app: App) {
    register(&app, "alice").await;

    let result = app
        .users()
        .create_user(CreateUserDto::new("bob", "alice@example.com", "password123"))
        .await;

    let err = result.expect_err("duplicate email should be rejected");
    assert!(matches!(err, UserServiceError::EmailAlreadyExists(ref email) if email == "alice@example.com"));
    assert_eq!(err.kind(), ErrorKind::EmailAlreadyExists);

    let listed = app.users().list_users().await.expect("listing should succeed");
    assert_eq!(listed.len(), 1);
}

#[rstest]
#[case(CreateUserDto::new("alice", "not-an-email", "password123"))]
#[case(CreateUserDto::new("alice", "alice@example.com", "short"))]
#[case(CreateUserDto::new("al", "alice@example.com", "password123"))]
#[case(CreateUserDto::new("a".repeat(21), "alice@example.com", "password123"))]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_registrations_store_nothing(app: App, #[case] draft: CreateUserDto) {
    let err = app
        .users()
        .create_user(draft)
        .await
        .expect_err("invalid draft should be rejected");

    assert_eq!(err.kind(), ErrorKind::Validation);
    let listed = app.users().list_users().await.expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_user_is_gone(app: App) {
    let alice = register(&app, "alice").await;

    app.users()
        .delete_user(&alice.id)
        .await
        .expect("delete should succeed");

    let err = app
        .users()
        .get_user(&alice.id)
        .await
        .expect_err("deleted user should not be found");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let again = app
        .users()
        .delete_user(&alice.id)
        .await
        .expect_err("second delete should fail");
    assert_eq!(again.kind(), ErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_user_id_is_not_found(app: App) {
    let err = app
        .users()
        .get_user(&UserId::from("Uunknown"))
        .await
        .expect_err("unknown id should not be found");

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_distinct_registrations_all_succeed(app: App) {
    let app = Arc::new(app);
    let handles: Vec<_> = (0..12)
        .map(|n| {
            let app = Arc::clone(&app);
            tokio::spawn(async move { app.users().create_user(registration(&format!("user{n:02}"))).await })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let user = handle
            .await
            .expect("task should not panic")
            .expect("registration should succeed");
        ids.insert(user.id);
    }

    assert_eq!(ids.len(), 12);
    let listed = app.users().list_users().await.expect("listing should succeed");
    assert_eq!(listed.len(), 12);
}
