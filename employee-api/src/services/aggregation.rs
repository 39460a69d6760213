//! Salary and name aggregation over the full employee list
//!
//! Pure functions. Upstream offers no filtering, so every aggregate is
//! computed over a freshly fetched list.

use shared::models::Employee;

use crate::utils::{AppError, AppResult, ErrorCode};

/// How many names the top earners endpoint returns
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Maximum salary over the list
pub fn highest_salary(employees: &[Employee]) -> AppResult<i32> {
    employees
        .iter()
        .map(|e| e.salary)
        .max()
        .ok_or_else(|| AppError::not_found("No employees found with highest salary"))
}

/// Names of the ten highest earners, highest first
///
/// Equal salaries keep their upstream order.
pub fn top_ten_names(mut employees: Vec<Employee>) -> Vec<String> {
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    employees
        .into_iter()
        .take(TOP_EARNERS_LIMIT)
        .map(|e| e.name)
        .collect()
}

/// Case-insensitive substring match on the employee name
pub fn search_by_name(employees: Vec<Employee>, term: &str) -> Vec<Employee> {
    let needle = term.to_lowercase();
    employees
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}

/// Reject empty or whitespace-only search terms
pub fn require_search_term(term: &str) -> AppResult<()> {
    if term.trim().is_empty() {
        tracing::error!("Search string(name) is empty");
        return Err(AppError::with_message(
            ErrorCode::EmptySearchString,
            "Search string(name) cannot be empty",
        ));
    }
    Ok(())
}
