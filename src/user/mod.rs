//! User registration and lookup.
//!
//! Users are created through [`services::UserService`], which validates the
//! draft, enforces email uniqueness, and issues the identifier before the
//! record reaches storage. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Wire-shaped transfer objects in [`dto`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod dto;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
