//! Employee lifecycle orchestration
//!
//! Validates input, resolves ids and composes upstream calls with the
//! aggregation functions. Holds no state besides the gateway handle.

use std::sync::Arc;

use employee_client::EmployeeGateway;
use shared::models::{CreateEmployeeRequest, Employee};
use uuid::Uuid;

use super::aggregation;
use crate::utils::validation::validate_create_employee;
use crate::utils::{AppError, AppResult};

/// Confirmation returned after a successful delete
pub const DELETE_CONFIRMATION: &str = "Employee deleted successfully";

/// Employee service
pub struct EmployeeService {
    gateway: Arc<dyn EmployeeGateway>,
}

impl EmployeeService {
    pub fn new(gateway: Arc<dyn EmployeeGateway>) -> Self {
        Self { gateway }
    }

    pub async fn all_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(self.gateway.list_employees().await?)
    }

    /// Look up one employee; `id` must be a UUID
    pub async fn employee_by_id(&self, id: &str) -> AppResult<Employee> {
        let id = parse_employee_id(id)?;
        Ok(self.gateway.get_employee(id).await?)
    }

    /// Delete by id
    ///
    /// Upstream only deletes by name, so the employee is fetched first and
    /// its name is sent to the delete call.
    pub async fn delete_employee_by_id(&self, id: &str) -> AppResult<String> {
        let employee = self.employee_by_id(id).await?;

        let deleted = self
            .gateway
            .delete_employee_by_name(&employee.name)
            .await?;
        if !deleted {
            tracing::error!(employee_id = %employee.id, name = %employee.name, "Upstream deleted nothing");
            return Err(AppError::employee_not_found(employee.id));
        }

        tracing::info!(employee_id = %employee.id, "Employee deleted");
        Ok(DELETE_CONFIRMATION.to_string())
    }

    pub async fn create_employee(&self, request: CreateEmployeeRequest) -> AppResult<Employee> {
        validate_create_employee(&request)?;
        let employee = self.gateway.create_employee(&request).await?;
        tracing::info!(employee_id = %employee.id, "Employee created");
        Ok(employee)
    }

    /// Case-insensitive name search; blank terms never reach upstream
    pub async fn search_employees(&self, term: &str) -> AppResult<Vec<Employee>> {
        aggregation::require_search_term(term)?;
        let employees = self.gateway.list_employees().await?;
        Ok(aggregation::search_by_name(employees, term))
    }

    pub async fn highest_salary(&self) -> AppResult<i32> {
        let employees = self.gateway.list_employees().await?;
        aggregation::highest_salary(&employees)
    }

    pub async fn top_ten_highest_earning_names(&self) -> AppResult<Vec<String>> {
        let employees = self.gateway.list_employees().await?;
        Ok(aggregation::top_ten_names(employees))
    }
}

fn parse_employee_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| {
        tracing::error!(employee_id = %id, "Invalid employee id");
        AppError::invalid_employee_id(id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use employee_client::{ClientError, ClientResult};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::utils::ErrorCode;

    /// In-memory gateway with a call counter
    #[derive(Default)]
    struct FakeGateway {
        employees: Mutex<Vec<Employee>>,
        delete_result: Option<bool>,
        rate_limited: bool,
        calls: AtomicUsize,
    }

    impl FakeGateway {
        fn with(employees: Vec<Employee>) -> Self {
            Self {
                employees: Mutex::new(employees),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) -> ClientResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.rate_limited {
                return Err(ClientError::RateLimited { attempts: 5 });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl EmployeeGateway for FakeGateway {
        async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
            self.hit()?;
            Ok(self.employees.lock().unwrap().clone())
        }

        async fn get_employee(&self, id: Uuid) -> ClientResult<Employee> {
            self.hit()?;
            self.employees
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or(ClientError::NotFound(id))
        }

        async fn create_employee(&self, request: &CreateEmployeeRequest) -> ClientResult<Employee> {
            self.hit()?;
            let employee = Employee {
                id: Uuid::new_v4(),
                name: request.name.clone().unwrap_or_default(),
                salary: request.salary.unwrap_or_default(),
                age: request.age.unwrap_or_default(),
                title: request.title.clone().unwrap_or_default(),
                email: None,
            };
            self.employees.lock().unwrap().push(employee.clone());
            Ok(employee)
        }

        async fn delete_employee_by_name(&self, name: &str) -> ClientResult<bool> {
            self.hit()?;
            if let Some(result) = self.delete_result {
                return Ok(result);
            }
            let mut employees = self.employees.lock().unwrap();
            let before = employees.len();
            employees.retain(|e| e.name != name);
            Ok(employees.len() != before)
        }
    }

    fn employee(name: &str, salary: i32) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: name.to_string(),
            salary,
            age: 30,
            title: "Engineer".to_string(),
            email: None,
        }
    }

    fn service(gateway: FakeGateway) -> (EmployeeService, Arc<FakeGateway>) {
        let gateway = Arc::new(gateway);
        (EmployeeService::new(gateway.clone()), gateway)
    }

    #[tokio::test]
    async fn test_employee_by_id() {
        let jill = employee("Jill", 100);
        let (svc, _) = service(FakeGateway::with(vec![jill.clone()]));

        let found = svc.employee_by_id(&jill.id.to_string()).await.unwrap();
        assert_eq!(found, jill);

        let missing = Uuid::new_v4();
        let err = svc.employee_by_id(&missing.to_string()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
    }

    #[tokio::test]
    async fn test_invalid_id_skips_upstream() {
        let (svc, gateway) = service(FakeGateway::default());
        let err = svc.employee_by_id("not-a-uuid").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEmployeeId);
        assert_eq!(
            err.message,
            "Invalid employee id : not-a-uuid, Requires employee id in UUID format."
        );
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let jill = employee("Jill", 100);
        let (svc, gateway) = service(FakeGateway::with(vec![jill.clone(), employee("Bob", 1)]));

        let msg = svc.delete_employee_by_id(&jill.id.to_string()).await.unwrap();
        assert_eq!(msg, DELETE_CONFIRMATION);
        assert_eq!(gateway.employees.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_nothing_deleted_is_not_found() {
        let jill = employee("Jill", 100);
        let (svc, _) = service(FakeGateway {
            delete_result: Some(false),
            ..FakeGateway::with(vec![jill.clone()])
        });

        let err = svc.delete_employee_by_id(&jill.id.to_string()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, format!("Employee with ID : {} not found.", jill.id));
    }

    #[tokio::test]
    async fn test_create_validates_before_upstream() {
        let (svc, gateway) = service(FakeGateway::default());
        let request = CreateEmployeeRequest::new("Jill", 100, 12, "Advisor");

        let err = svc.create_employee(request).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeValidationFailed);
        assert_eq!(gateway.calls(), 0);

        let created = svc
            .create_employee(CreateEmployeeRequest::new("Jill", 100, 30, "Advisor"))
            .await
            .unwrap();
        assert_eq!(created.name, "Jill");
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_search_skips_upstream() {
        let (svc, gateway) = service(FakeGateway::with(vec![employee("Jill", 1)]));
        let err = svc.search_employees("  ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptySearchString);
        assert_eq!(gateway.calls(), 0);

        let found = svc.search_employees("jI").await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_aggregates() {
        let (svc, _) = service(FakeGateway::with(vec![
            employee("Low", 10),
            employee("High", 500),
            employee("Mid", 200),
        ]));
        assert_eq!(svc.highest_salary().await.unwrap(), 500);
        assert_eq!(
            svc.top_ten_highest_earning_names().await.unwrap(),
            vec!["High", "Mid", "Low"]
        );
    }

    #[tokio::test]
    async fn test_upstream_errors_are_translated() {
        let (svc, _) = service(FakeGateway {
            rate_limited: true,
            ..Default::default()
        });
        let err = svc.all_employees().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::UpstreamRateLimited);
    }
}
