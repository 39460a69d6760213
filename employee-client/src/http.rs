//! HTTP client for the upstream employee service

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    ClientError, ClientResult, CreateEmployeeRequest, DeleteEmployeeRequest, Employee,
    EmployeeGateway, Operation, RetryPolicy, UpstreamConfig, UpstreamResponse,
};

/// HTTP client for making requests to the upstream employee service
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Create a new upstream client from configuration
    pub fn new(config: UpstreamConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { client, config })
    }

    fn retry(&self) -> RetryPolicy {
        self.config.retry
    }

    /// Send a request, retrying on 429, and unwrap the envelope of a 200
    ///
    /// `build` is called once per attempt since a sent request is consumed.
    async fn execute<T, F>(&self, operation: Operation, build: F) -> ClientResult<T>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let policy = self.retry();
        let mut retries = 0u32;

        loop {
            let response = build().send().await.map_err(|source| {
                tracing::error!(
                    operation = operation.name(),
                    error = %source,
                    "Failed to reach employee service"
                );
                ClientError::Transport {
                    operation: operation.clone(),
                    source,
                }
            })?;

            let status = response.status();
            match status {
                StatusCode::OK => return Self::decode(response, &operation).await,

                StatusCode::TOO_MANY_REQUESTS => {
                    if !policy.should_retry(retries) {
                        tracing::warn!(
                            operation = operation.name(),
                            attempts = retries + 1,
                            "Employee service still rate limiting, giving up"
                        );
                        return Err(ClientError::RateLimited {
                            attempts: retries + 1,
                        });
                    }

                    let delay = policy.delay_for(retries);
                    tracing::warn!(
                        operation = operation.name(),
                        attempt = retries + 1,
                        max_attempts = policy.max_attempts(),
                        delay_ms = delay.as_millis() as u64,
                        "Employee service returned 429, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    retries += 1;
                }

                StatusCode::NOT_FOUND => {
                    if let Some(id) = operation.employee_id() {
                        tracing::info!(employee_id = %id, "Employee not found upstream");
                        return Err(ClientError::NotFound(id));
                    }
                    return Err(Self::unexpected_status(operation, status));
                }

                _ => return Err(Self::unexpected_status(operation, status)),
            }
        }
    }

    fn unexpected_status(operation: Operation, status: StatusCode) -> ClientError {
        tracing::error!(
            operation = operation.name(),
            status = %status,
            "Unexpected status from employee service"
        );
        ClientError::Status { operation, status }
    }

    /// Read the body and parse the `{data, status}` envelope
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        operation: &Operation,
    ) -> ClientResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                operation: operation.clone(),
                source,
            })?;

        serde_json::from_slice::<UpstreamResponse<T>>(&bytes)
            .map(UpstreamResponse::into_data)
            .map_err(|source| {
                tracing::error!(
                    operation = operation.name(),
                    error = %source,
                    "Malformed response from employee service"
                );
                ClientError::Decode {
                    operation: operation.clone(),
                    source,
                }
            })
    }
}

#[async_trait]
impl EmployeeGateway for UpstreamClient {
    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        let url = self.config.collection_url();
        tracing::info!(url = %url, "Calling employee service to get all employees");

        let employees: Vec<Employee> = self
            .execute(Operation::ListEmployees, || self.client.get(&url))
            .await?;

        tracing::info!(
            count = employees.len(),
            "Fetched all employees successfully"
        );
        Ok(employees)
    }

    async fn get_employee(&self, id: Uuid) -> ClientResult<Employee> {
        let url = self.config.employee_url(id);
        tracing::info!(url = %url, employee_id = %id, "Calling employee service to get employee");

        let employee: Employee = self
            .execute(Operation::GetEmployee(id), || self.client.get(&url))
            .await?;

        tracing::info!(employee_id = %id, "Successfully fetched employee data");
        Ok(employee)
    }

    async fn create_employee(&self, request: &CreateEmployeeRequest) -> ClientResult<Employee> {
        let url = self.config.collection_url();
        let name = request.name.clone().unwrap_or_default();
        tracing::info!(url = %url, name = %name, "Calling employee service to create employee");

        let employee: Employee = self
            .execute(Operation::CreateEmployee(name), || {
                self.client.post(&url).json(request)
            })
            .await?;

        tracing::info!(employee_id = %employee.id, "Employee created upstream");
        Ok(employee)
    }

    async fn delete_employee_by_name(&self, name: &str) -> ClientResult<bool> {
        let url = self.config.collection_url();
        tracing::info!(url = %url, name = %name, "Calling employee service to delete employee");

        let body = DeleteEmployeeRequest::new(name);
        let deleted: bool = self
            .execute(Operation::DeleteEmployee(name.to_string()), || {
                self.client.delete(&url).json(&body)
            })
            .await?;

        tracing::info!(name = %name, deleted, "Delete request processed by employee service");
        Ok(deleted)
    }
}
