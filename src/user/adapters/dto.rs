//! Pure mappings between [`UserDto`] and the stored [`User`] entity.

use crate::user::{
    domain::{PersistedUserData, User},
    dto::UserDto,
};

/// Converts a service DTO into a storage entity.
#[must_use]
pub fn to_entity(dto: UserDto) -> User {
    User::from_persisted(PersistedUserData {
        id: dto.id,
        username: dto.username,
        email: dto.email,
        password: dto.password,
        created_at: dto.created_at,
        updated_at: dto.updated_at,
    })
}

/// Converts a storage entity into a service DTO.
#[must_use]
pub fn to_dto(user: &User) -> UserDto {
    UserDto {
        id: user.id().clone(),
        username: user.username().to_owned(),
        email: user.email().to_owned(),
        password: user.password().to_owned(),
        created_at: user.created_at(),
        updated_at: user.updated_at(),
    }
}

/// Converts a sequence of storage entities into service DTOs.
#[must_use]
pub fn to_dtos(users: &[User]) -> Vec<UserDto> {
    users.iter().map(to_dto).collect()
}
