//! Storage layer
//!
//! All state lives in process memory:
//! - Companies, in insertion order
//! - Employees, owned by their company
//!
//! Nothing survives a restart.

mod company_repository;
mod employee_repository;
mod store;

use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use thiserror::Error;

pub use company_repository::CompanyRepository;
pub use employee_repository::EmployeeRepository;
pub use store::{Companies, EntityStore};

/// Store handle shared across handlers
pub type SharedStore = Arc<EntityStore>;

/// Lookup and uniqueness failures reported by the repositories
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("company {0} not found")]
    CompanyNotFound(String),

    #[error("employee {0} not found")]
    EmployeeNotFound(String),

    #[error("a company named {0:?} already exists")]
    DuplicateCompanyName(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Create an empty store
pub fn init_store() -> SharedStore {
    Arc::new(EntityStore::new())
}

const HEALTH_LOCK_TIMEOUT: Duration = Duration::from_secs(1);

/// Check that the store can be read, returning the number of companies it holds
pub async fn check_health(store: &EntityStore) -> anyhow::Result<usize> {
    let companies = tokio::time::timeout(HEALTH_LOCK_TIMEOUT, store.read())
        .await
        .map_err(|_| anyhow!("store lock not acquired within {:?}", HEALTH_LOCK_TIMEOUT))?;
    Ok(companies.len())
}
