//! Error types and API error body

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;
use thiserror::Error;

/// Message returned for unclassified internal failures
///
/// Internal details are logged, never sent to the caller.
pub const SUPPORT_MESSAGE: &str =
    "An Internal error has occurred. Please contact api-support@company.com";

/// Application error with structured error code and details
///
/// This is the primary error type of the gateway, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for logging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (ids, upstream status, ...)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Whether the message must be hidden behind [`SUPPORT_MESSAGE`]
    pub fn is_unclassified(&self) -> bool {
        matches!(self.code, ErrorCode::InternalError)
    }

    /// The message actually sent to the caller
    pub fn public_message(&self) -> &str {
        if self.is_unclassified() {
            SUPPORT_MESSAGE
        } else {
            &self.message
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error for the create-employee payload
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::EmployeeValidationFailed, msg)
    }

    /// Create an invalid employee id error
    pub fn invalid_employee_id(id: &str) -> Self {
        Self::with_message(
            ErrorCode::InvalidEmployeeId,
            format!("Invalid employee id : {id}, Requires employee id in UUID format."),
        )
        .with_detail("id", id)
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, msg)
    }

    /// Create an employee not found error
    pub fn employee_not_found(id: impl Display) -> Self {
        let id = id.to_string();
        Self::with_message(
            ErrorCode::EmployeeNotFound,
            format!("Employee with ID : {id} not found."),
        )
        .with_detail("id", id)
    }

    /// Create an upstream rate-limit error
    pub fn rate_limited() -> Self {
        Self::new(ErrorCode::UpstreamRateLimited)
    }

    /// Create an upstream integration error
    pub fn integration(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::UpstreamStatus, msg)
    }

    /// Create an upstream connectivity error
    pub fn upstream_unavailable() -> Self {
        Self::new(ErrorCode::UpstreamUnavailable)
    }

    /// Create an inbound request timeout error
    pub fn timeout() -> Self {
        Self::new(ErrorCode::TimeoutError)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Error body sent to API callers
///
/// ```json
/// { "error": "Employee with ID : ... not found." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Body for unclassified failures
    pub fn support() -> Self {
        Self::new(SUPPORT_MESSAGE)
    }
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self::new(err.public_message())
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        match self.code.category() {
            ErrorCategory::System | ErrorCategory::Upstream => {
                tracing::error!(
                    code = %self.code,
                    message = %self.message,
                    details = ?self.details,
                    "Request failed"
                );
            }
            ErrorCategory::General | ErrorCategory::Employee => {
                tracing::debug!(code = %self.code, message = %self.message, "Request rejected");
            }
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
