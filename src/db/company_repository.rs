//! Company repository

use tracing::{debug, info, warn};

use super::{EntityStore, StoreError, StoreResult};
use crate::models::{Company, CompanyListQuery, CreateCompanyRequest, UpdateCompanyRequest};

pub struct CompanyRepository<'a> {
    store: &'a EntityStore,
}

impl<'a> CompanyRepository<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// List companies in insertion order, optionally restricted to one page
    pub async fn list(&self, query: &CompanyListQuery) -> Vec<Company> {
        let companies = self.store.read().await;
        query.paginate(companies.iter().cloned())
    }

    pub async fn get_by_id(&self, id: &str) -> StoreResult<Company> {
        let companies = self.store.read().await;
        companies.find_by_id(id).cloned().ok_or_else(|| {
            debug!(company_id = %id, "Company lookup missed");
            StoreError::CompanyNotFound(id.to_string())
        })
    }

    /// Create a company, rejecting names that are already taken.
    ///
    /// The name check and the insert happen under the same write lock.
    pub async fn create(&self, req: &CreateCompanyRequest) -> StoreResult<Company> {
        let mut companies = self.store.write().await;

        if companies.find_by_name(&req.name) {
            warn!(name = %req.name, "Company name already taken");
            return Err(StoreError::DuplicateCompanyName(req.name.clone()));
        }

        let company = Company::new(req.name.clone());
        companies.insert(company.clone());
        info!(company_id = %company.id, name = %company.name, "Created company");

        Ok(company)
    }

    /// Apply a partial update. A supplied name is taken as-is; uniqueness is
    /// not re-checked here.
    pub async fn update(&self, id: &str, req: &UpdateCompanyRequest) -> StoreResult<Company> {
        let mut companies = self.store.write().await;
        let company = companies
            .find_by_id_mut(id)
            .ok_or_else(|| StoreError::CompanyNotFound(id.to_string()))?;

        if let Some(ref name) = req.name {
            company.name = name.clone();
            info!(company_id = %id, name = %company.name, "Renamed company");
        }

        Ok(company.clone())
    }

    /// Delete a company together with all of its employees
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut companies = self.store.write().await;
        let removed = companies
            .remove(id)
            .ok_or_else(|| StoreError::CompanyNotFound(id.to_string()))?;

        info!(
            company_id = %id,
            employees = removed.employee_count(),
            "Deleted company"
        );
        Ok(())
    }
}
