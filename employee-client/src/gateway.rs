//! Employee gateway trait
//!
//! The service layer only talks to upstream through this trait, so the
//! reqwest client can be swapped for an in-memory implementation in tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{ClientResult, CreateEmployeeRequest, Employee};

/// The four operations offered by the upstream employee service
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    /// Fetch every employee
    async fn list_employees(&self) -> ClientResult<Vec<Employee>>;

    /// Fetch one employee by id
    async fn get_employee(&self, id: Uuid) -> ClientResult<Employee>;

    /// Create an employee; upstream assigns the id
    async fn create_employee(&self, request: &CreateEmployeeRequest) -> ClientResult<Employee>;

    /// Delete by name; `false` means upstream matched nothing
    async fn delete_employee_by_name(&self, name: &str) -> ClientResult<bool>;
}
