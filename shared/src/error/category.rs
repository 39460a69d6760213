//! Error category classification

use super::codes::ErrorCode;

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 8xxx: Employee errors
/// - 90xx: System errors
/// - 91xx: Upstream integration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Employee errors (8xxx)
    Employee,
    /// System errors (90xx and anything unassigned)
    System,
    /// Upstream employee service errors (91xx)
    Upstream,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            8000..9000 => Self::Employee,
            9100..9200 => Self::Upstream,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
