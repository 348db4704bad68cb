//! Adapter implementations for user ports and DTO mapping.

pub mod dto;
pub mod memory;
