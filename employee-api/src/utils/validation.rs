//! Input validation helpers
//!
//! Rules for the create-employee payload. The first violated rule wins, in
//! this order: age, name, salary, title.

use shared::models::CreateEmployeeRequest;

use crate::utils::AppError;

// ── Field limits ────────────────────────────────────────────────────

/// Youngest employable age
pub const MIN_AGE: i32 = 16;

/// Oldest employable age
pub const MAX_AGE: i32 = 75;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate a create-employee payload before it is forwarded upstream.
pub fn validate_create_employee(request: &CreateEmployeeRequest) -> Result<(), AppError> {
    match request.age {
        Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => {}
        age => {
            tracing::error!(?age, "Invalid Employee age");
            return Err(AppError::validation(format!(
                "Employee age must be between {MIN_AGE} and {MAX_AGE}"
            )));
        }
    }

    if !is_present(&request.name) {
        tracing::error!(name = ?request.name, "Invalid Employee name");
        return Err(AppError::validation("Employee name must specified"));
    }

    match request.salary {
        Some(salary) if salary > 0 => {}
        salary => {
            tracing::error!(?salary, "Invalid Employee salary");
            return Err(AppError::validation(
                "Employee salary must be greater than zero",
            ));
        }
    }

    if !is_present(&request.title) {
        tracing::error!(title = ?request.title, "Invalid Employee title");
        return Err(AppError::validation("Employee title must specified"));
    }

    Ok(())
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
