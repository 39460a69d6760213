//! Employee Client - HTTP client for the upstream employee service
//!
//! Wraps the four upstream operations (list, get, create, delete-by-name)
//! with bounded retry on 429 and translates upstream status codes into
//! [`ClientError`].

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod retry;

pub use config::UpstreamConfig;
pub use error::{ClientError, ClientResult, Operation};
pub use gateway::EmployeeGateway;
pub use http::UpstreamClient;
pub use retry::RetryPolicy;

// Re-export shared types for convenience
pub use shared::models::{CreateEmployeeRequest, DeleteEmployeeRequest, Employee};
pub use shared::UpstreamResponse;
