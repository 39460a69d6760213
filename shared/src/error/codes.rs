//! Unified error codes for the employee gateway
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors (internal + upstream integration)

use std::fmt;

/// Unified error code enum
///
/// Codes are logged as their u16 value, grouped by range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Resource not found
    NotFound = 3,
    /// Request body could not be parsed
    InvalidFormat = 6,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee id is not a UUID
    InvalidEmployeeId = 8002,
    /// Create payload failed validation
    EmployeeValidationFailed = 8003,
    /// Search string is blank
    EmptySearchString = 8004,

    // ==================== 90xx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Inbound request exceeded its deadline
    TimeoutError = 9004,

    // ==================== 91xx: Upstream ====================
    /// Upstream kept answering 429 after all retries
    UpstreamRateLimited = 9101,
    /// Upstream answered with an unexpected status
    UpstreamStatus = 9102,
    /// Upstream unreachable or response unreadable
    UpstreamUnavailable = 9103,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidFormat => "Invalid format",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::InvalidEmployeeId => "Requires employee id in UUID format",
            ErrorCode::EmployeeValidationFailed => "Employee data is invalid",
            ErrorCode::EmptySearchString => "Search string(name) cannot be empty",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::TimeoutError => {
                "Request timed out while waiting for the employee service. Please try again later."
            }

            // Upstream
            ErrorCode::UpstreamRateLimited => {
                "Max retry exceeded due to 429 status. Please try again later. System is under heavy load!!"
            }
            ErrorCode::UpstreamStatus => "Employee service returned an unexpected status",
            ErrorCode::UpstreamUnavailable => {
                "Error occurred in connecting with employee service. Please try again later."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
