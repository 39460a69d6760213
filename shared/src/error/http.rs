//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound | Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            // 429 Too Many Requests (upstream retries exhausted)
            Self::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,

            // 408 Request Timeout
            Self::TimeoutError => StatusCode::REQUEST_TIMEOUT,

            // 500 Internal Server Error
            Self::InternalError | Self::UpstreamStatus | Self::UpstreamUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request
            Self::InvalidFormat
            | Self::InvalidEmployeeId
            | Self::EmployeeValidationFailed
            | Self::EmptySearchString => StatusCode::BAD_REQUEST,
        }
    }
}
