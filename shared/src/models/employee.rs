//! Employee Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee record as owned by the upstream service
///
/// The same JSON shape is read from upstream and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: i32,
    #[serde(rename = "employee_age")]
    pub age: i32,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(rename = "employee_email", default)]
    pub email: Option<String>,
}

/// Create employee payload
///
/// Every field is optional at the JSON level so that a missing field is
/// reported by validation rather than as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: Option<String>,
    pub salary: Option<i32>,
    pub age: Option<i32>,
    pub title: Option<String>,
}

impl CreateEmployeeRequest {
    pub fn new(name: impl Into<String>, salary: i32, age: i32, title: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            salary: Some(salary),
            age: Some(age),
            title: Some(title.into()),
        }
    }
}

/// Delete-by-name payload sent to upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmployeeRequest {
    pub name: String,
}

impl DeleteEmployeeRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
