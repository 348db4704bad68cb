//! Pure mappings between [`TaskDto`] and the stored [`Task`] entity.

use crate::task::{
    domain::{PersistedTaskData, Task},
    dto::TaskDto,
};

/// Converts a service DTO into a storage entity.
#[must_use]
pub fn to_entity(dto: TaskDto) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: dto.id,
        user_id: dto.user_id,
        title: dto.title,
        description: dto.description,
        status: dto.status,
        due_date: dto.due_date,
        created_at: dto.created_at,
        updated_at: dto.updated_at,
    })
}

/// Converts a storage entity into a service DTO.
#[must_use]
pub fn to_dto(task: &Task) -> TaskDto {
    TaskDto {
        id: task.id().clone(),
        user_id: task.user_id().clone(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        status: task.status(),
        due_date: task.due_date(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

/// Converts a sequence of storage entities into service DTOs.
#[must_use]
pub fn to_dtos(tasks: &[Task]) -> Vec<TaskDto> {
    tasks.iter().map(to_dto).collect()
}
