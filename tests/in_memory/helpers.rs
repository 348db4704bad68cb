//! Shared fixtures for in-memory backend tests.

use chrono::NaiveDate;
use rstest::fixture;
use taskdesk::app::App;
use taskdesk::task::dto::{CreateTaskDto, TaskDto};
use taskdesk::user::dto::{CreateUserDto, UserDto};

/// Provides a fresh, empty backend for each test.
#[fixture]
pub fn app() -> App {
    App::in_memory()
}

/// Builds a valid registration draft for `username`.
pub fn registration(username: &str) -> CreateUserDto {
    CreateUserDto::new(username, format!("{username}@example.com"), "password123")
}

/// Registers `username` and returns the stored record.
///
/// # Panics
///
/// Panics if registration fails.
pub async fn register(app: &App, username: &str) -> UserDto {
    app.users()
        .create_user(registration(username))
        .await
        .expect("registration should succeed")
}

/// Creates a task titled `title` owned by `owner`.
///
/// # Panics
///
/// Panics if task creation fails.
pub async fn create_task(app: &App, owner: &UserDto, title: &str) -> TaskDto {
    app.tasks()
        .create_task(CreateTaskDto::new(owner.id.as_str(), title, due_date()))
        .await
        .expect("task creation should succeed")
}

/// A due date used by tests that do not care about its value.
///
/// # Panics
///
/// Panics if the hard-coded date is invalid.
pub fn due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).expect("valid date")
}
