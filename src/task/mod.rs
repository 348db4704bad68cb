//! Task tracking for registered users.
//!
//! Tasks are created through [`services::TaskService`], which checks that the
//! owning user exists, forces new tasks into the `pending` status, and issues
//! the identifier before the record reaches storage. Updates replace the whole
//! task apart from its identity, owner, and creation time. The module follows
//! hexagonal architecture:
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
