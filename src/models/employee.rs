//! Employee data model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee owned by exactly one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Identifier, unique within the owning company
    #[serde(rename = "employeeID")]
    pub id: String,

    pub name: String,

    pub salary: f64,
}

impl Employee {
    /// Create an employee with a freshly generated identifier
    pub fn new(name: impl Into<String>, salary: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            salary,
        }
    }

    /// Apply a partial update; absent fields keep their stored value
    pub fn apply(&mut self, update: &UpdateEmployeeRequest) {
        if let Some(ref name) = update.name {
            self.name = name.clone();
        }
        if let Some(salary) = update.salary {
            self.salary = salary;
        }
    }
}

/// Request to add an employee to a company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub salary: f64,
}

impl From<CreateEmployeeRequest> for Employee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Employee::new(req.name, req.salary)
    }
}

/// Partial employee update; `null` and missing fields are ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<f64>,
}
