//! Client error types

use std::fmt;

use reqwest::StatusCode;
use shared::error::AppError;
use thiserror::Error;
use uuid::Uuid;

/// The upstream operation a request belongs to
///
/// Carried by errors so that messages and logs name what was being done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListEmployees,
    GetEmployee(Uuid),
    CreateEmployee(String),
    DeleteEmployee(String),
}

impl Operation {
    /// Employee id targeted by this operation, if any
    pub fn employee_id(&self) -> Option<Uuid> {
        match self {
            Operation::GetEmployee(id) => Some(*id),
            _ => None,
        }
    }

    /// Short name used as a structured log field
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListEmployees => "list_employees",
            Operation::GetEmployee(_) => "get_employee",
            Operation::CreateEmployee(_) => "create_employee",
            Operation::DeleteEmployee(_) => "delete_employee",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ListEmployees => write!(f, "fetching all employees data"),
            Operation::GetEmployee(id) => write!(f, "fetching employee data with id : {id}"),
            Operation::CreateEmployee(name) => {
                write!(f, "creating the employee with name : {name}")
            }
            Operation::DeleteEmployee(name) => {
                write!(f, "deleting the employee with name : {name}")
            }
        }
    }
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Upstream kept answering 429 until the retry policy gave up
    #[error(
        "Max retry exceeded due to 429 status after {attempts} attempts. Please try again later. System is under heavy load!!"
    )]
    RateLimited { attempts: u32 },

    /// Upstream answered 404 for a single-employee lookup
    #[error("Employee with ID : {0} not found.")]
    NotFound(Uuid),

    /// Upstream answered with any other unexpected status
    #[error("Error occurred while {operation}. Status code returned: {status}")]
    Status {
        operation: Operation,
        status: StatusCode,
    },

    /// Request could not be sent or the response could not be read
    #[error("Error occurred in connecting with employee service while {operation}: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered 200 with a body that is not the expected envelope
    #[error("Invalid response from employee service while {operation}: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Translate client failures into API errors at the client boundary
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::RateLimited { attempts } => {
                AppError::rate_limited().with_detail("attempts", *attempts)
            }
            ClientError::NotFound(id) => AppError::employee_not_found(id),
            ClientError::Status { operation, status } => AppError::integration(err.to_string())
                .with_detail("operation", operation.name())
                .with_detail("status", status.as_u16()),
            ClientError::Transport { operation, source } => AppError::upstream_unavailable()
                .with_detail("operation", operation.name())
                .with_detail("cause", source.to_string()),
            ClientError::Decode { operation, .. } => AppError::integration(err.to_string())
                .with_detail("operation", operation.name()),
            ClientError::Build(_) => AppError::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_operation_display() {
        let id = Uuid::nil();
        assert_eq!(
            Operation::ListEmployees.to_string(),
            "fetching all employees data"
        );
        assert_eq!(
            Operation::GetEmployee(id).to_string(),
            format!("fetching employee data with id : {id}")
        );
        assert_eq!(
            Operation::DeleteEmployee("Jill".into()).to_string(),
            "deleting the employee with name : Jill"
        );
    }

    #[test]
    fn test_status_error_message() {
        let err = ClientError::Status {
            operation: Operation::CreateEmployee("Jill".into()),
            status: StatusCode::BAD_GATEWAY,
        };
        assert_eq!(
            err.to_string(),
            "Error occurred while creating the employee with name : Jill. Status code returned: 502 Bad Gateway"
        );
    }

    #[test]
    fn test_rate_limited_message() {
        let err = ClientError::RateLimited { attempts: 5 };
        assert!(err.to_string().contains("after 5 attempts"));
    }

    #[test]
    fn test_into_app_error() {
        let id = Uuid::new_v4();

        let err: AppError = ClientError::NotFound(id).into();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, format!("Employee with ID : {id} not found."));

        let err: AppError = ClientError::RateLimited { attempts: 5 }.into();
        assert_eq!(err.code, ErrorCode::UpstreamRateLimited);
        assert_eq!(err.http_status(), StatusCode::TOO_MANY_REQUESTS);

        let err: AppError = ClientError::Status {
            operation: Operation::ListEmployees,
            status: StatusCode::SERVICE_UNAVAILABLE,
        }
        .into();
        assert_eq!(err.code, ErrorCode::UpstreamStatus);
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message.contains("Status code returned: 503"));
    }

    #[test]
    fn test_employee_id() {
        let id = Uuid::new_v4();
        assert_eq!(Operation::GetEmployee(id).employee_id(), Some(id));
        assert_eq!(Operation::ListEmployees.employee_id(), None);
    }
}
