//! Adapter implementations for task ports and DTO mapping.

pub mod dto;
pub mod memory;
