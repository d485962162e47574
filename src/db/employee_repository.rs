//! Employee repository
//!
//! Employees are only reachable through their owning company, so every
//! operation resolves the company first.

use tracing::info;

use super::{EntityStore, StoreError, StoreResult};
use crate::models::{Company, CreateEmployeeRequest, Employee, UpdateEmployeeRequest};

pub struct EmployeeRepository<'a> {
    store: &'a EntityStore,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Employees of a company, empty if none were added yet
    pub async fn list(&self, company_id: &str) -> StoreResult<Vec<Employee>> {
        let companies = self.store.read().await;
        let company = companies
            .find_by_id(company_id)
            .ok_or_else(|| StoreError::CompanyNotFound(company_id.to_string()))?;

        Ok(company.employees.clone().unwrap_or_default())
    }

    pub async fn create(
        &self,
        company_id: &str,
        req: CreateEmployeeRequest,
    ) -> StoreResult<Employee> {
        let mut companies = self.store.write().await;
        let company = companies
            .find_by_id_mut(company_id)
            .ok_or_else(|| StoreError::CompanyNotFound(company_id.to_string()))?;

        let employee = Employee::from(req);
        company
            .employees
            .get_or_insert_with(Vec::new)
            .push(employee.clone());

        info!(
            company_id = %company_id,
            employee_id = %employee.id,
            "Added employee"
        );
        Ok(employee)
    }

    /// Apply a partial update to one employee
    pub async fn update(
        &self,
        company_id: &str,
        employee_id: &str,
        req: &UpdateEmployeeRequest,
    ) -> StoreResult<Employee> {
        let mut companies = self.store.write().await;
        let employee = find_employee_mut(
            companies
                .find_by_id_mut(company_id)
                .ok_or_else(|| StoreError::CompanyNotFound(company_id.to_string()))?,
            employee_id,
        )?;

        employee.apply(req);
        info!(company_id = %company_id, employee_id = %employee_id, "Updated employee");

        Ok(employee.clone())
    }

    pub async fn delete(&self, company_id: &str, employee_id: &str) -> StoreResult<()> {
        let mut companies = self.store.write().await;
        let company = companies
            .find_by_id_mut(company_id)
            .ok_or_else(|| StoreError::CompanyNotFound(company_id.to_string()))?;

        let employees = company
            .employees
            .as_mut()
            .ok_or_else(|| StoreError::EmployeeNotFound(employee_id.to_string()))?;
        let position = employees
            .iter()
            .position(|employee| employee.id == employee_id)
            .ok_or_else(|| StoreError::EmployeeNotFound(employee_id.to_string()))?;

        employees.remove(position);
        info!(company_id = %company_id, employee_id = %employee_id, "Removed employee");

        Ok(())
    }
}

fn find_employee_mut<'c>(
    company: &'c mut Company,
    employee_id: &str,
) -> StoreResult<&'c mut Employee> {
    company
        .employees
        .as_mut()
        .and_then(|employees| employees.iter_mut().find(|e| e.id == employee_id))
        .ok_or_else(|| StoreError::EmployeeNotFound(employee_id.to_string()))
}
