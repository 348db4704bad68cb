//! Domain model for users.
//!
//! Holds the stored user entity, its identifier, and the field rules a
//! registration draft must satisfy.

mod error;
mod ids;
mod user;
mod validation;

pub use error::UserValidationError;
pub use ids::UserId;
pub use user::{PersistedUserData, User};
pub use validation::{
    MAX_USERNAME_LEN, MIN_PASSWORD_LEN, MIN_USERNAME_LEN, validate_email, validate_password,
    validate_username,
};
