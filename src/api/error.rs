//! Error translation for the outer transport.

use crate::error::ErrorKind;
use crate::task::services::TaskServiceError;
use crate::user::services::UserServiceError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A service failure ready to be rendered by a transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    /// Creates an error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable description of the violated rule.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the HTTP status code for this failure.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.kind {
            ErrorKind::NotFound => 404,
            ErrorKind::Validation
            | ErrorKind::InvalidTask
            | ErrorKind::InvalidStatus
            | ErrorKind::DuplicateId => 400,
            ErrorKind::EmailAlreadyExists => 409,
            ErrorKind::UserNotFound | ErrorKind::Internal => 500,
        }
    }

    /// Returns the JSON body for this failure.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.message.clone(),
        }
    }
}

impl From<UserServiceError> for ApiError {
    fn from(err: UserServiceError) -> Self {
        let api_error = Self::new(err.kind(), err.to_string());
        log_translation(&api_error);
        api_error
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        let api_error = Self::new(err.kind(), err.to_string());
        log_translation(&api_error);
        api_error
    }
}

fn log_translation(err: &ApiError) {
    if err.status_code() >= 500 {
        tracing::error!(kind = %err.kind, status = err.status_code(), "{}", err.message);
    } else {
        tracing::info!(kind = %err.kind, status = err.status_code(), "{}", err.message);
    }
}

/// JSON body describing a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Description of the violated rule or missing resource.
    pub error: String,
}
