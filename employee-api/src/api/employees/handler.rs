//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::models::{CreateEmployeeRequest, Employee};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::error::json_rejection;

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    tracing::info!("Received API request to get all employees");
    let employees = state.employees.all_employees().await?;
    Ok(Json(employees))
}

/// Search employees by name fragment
pub async fn search(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Employee>>> {
    tracing::info!(search = %name, "Received API request to search employees by name");
    let employees = state.employees.search_employees(&name).await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    tracing::info!(employee_id = %id, "Received API request to get employee by id");
    let employee = state.employees.employee_by_id(&id).await?;
    Ok(Json(employee))
}

/// Highest salary across all employees
pub async fn highest_salary(State(state): State<ServerState>) -> AppResult<Json<i32>> {
    tracing::info!("Received API request to get highest salary of employees");
    let salary = state.employees.highest_salary().await?;
    Ok(Json(salary))
}

/// Names of the ten highest earners
pub async fn top_ten_names(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    tracing::info!("Received API request to get top ten highest earning employee names");
    let names = state.employees.top_ten_highest_earning_names().await?;
    Ok(Json(names))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    tracing::info!("Received API request to create employee");
    let Json(request) = payload.map_err(json_rejection)?;
    let employee = state.employees.create_employee(request).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Delete an employee by id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<String>> {
    tracing::info!(employee_id = %id, "Received API request to delete employee by id");
    let message = state.employees.delete_employee_by_id(&id).await?;
    Ok(Json(message))
}
