//! Domain model for tasks.
//!
//! The task domain holds the stored task entity, its identifier, the status
//! enumeration, and the field rules that create and update drafts must meet.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskValidationError};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskStatus};
