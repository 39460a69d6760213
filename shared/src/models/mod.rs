//! Data models
//!
//! Shared between the upstream client and the API server.
//! Field names follow the upstream wire format exactly.

pub mod employee;

// Re-exports
pub use employee::*;
