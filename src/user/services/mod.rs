//! Application services for user registration.

mod account;

pub use account::{UserService, UserServiceError, UserServiceResult};
