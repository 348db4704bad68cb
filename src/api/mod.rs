//! Boundary between the services and an outer transport.
//!
//! Services return typed errors and full DTOs. This module is the single
//! place where those become outward-facing values: [`ApiError`] carries the
//! status code a transport should send, and the response types drop every
//! field that must not leave the process (the user's password).

mod error;
mod response;

pub use error::{ApiError, ErrorResponse};
pub use response::{TaskResponse, TasksResponse, UserResponse, UsersResponse};
