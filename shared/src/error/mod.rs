//! Unified error system for the employee gateway
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ErrorBody`]: The `{ "error": ... }` body returned to API callers
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 90xx: System errors
//! - 91xx: Upstream integration errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::employee_not_found("4a3a170b-22cd-4ac2-aad1-9bb5b34a1507");
//! assert_eq!(err.code, ErrorCode::EmployeeNotFound);
//!
//! let body = ErrorBody::from(&err);
//! assert!(body.error.contains("not found"));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody, SUPPORT_MESSAGE};
