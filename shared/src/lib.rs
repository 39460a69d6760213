//! Shared types for the employee gateway
//!
//! Common types used by both the upstream client and the API server:
//! employee wire models, the upstream response envelope and the unified
//! error system.

pub mod envelope;
pub mod error;
pub mod models;

// Re-exports
pub use envelope::UpstreamResponse;
pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
pub use models::{CreateEmployeeRequest, DeleteEmployeeRequest, Employee};
