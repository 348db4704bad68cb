//! Taskdesk: an in-memory users-and-tasks backend.
//!
//! This crate provides the storage and business-rule layers of a small
//! record-management service. Users and tasks live in concurrent in-memory
//! stores; services validate drafts, enforce email uniqueness and task
//! ownership, and hand back transfer objects ready for a transport.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Entities, identifiers, and field rules
//! - **Ports**: Repository traits
//! - **Adapters**: In-memory repositories and DTO mappings
//! - **Services**: Validation and orchestration above the ports
//!
//! # Modules
//!
//! - [`store`]: Generic concurrent keyed collection
//! - [`user`]: User registration and lookup
//! - [`task`]: Task creation, filtering, and replacement
//! - [`api`]: Error translation and outward response shapes
//! - [`app`]: Composition root
//! - [`settings`]: Environment-based configuration
//! - [`telemetry`]: Logging initialisation

pub mod api;
pub mod app;
pub mod error;
pub mod settings;
pub mod store;
pub mod task;
pub mod telemetry;
pub mod user;
