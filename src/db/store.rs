//! In-memory entity store
//!
//! Companies are kept in insertion order and looked up with linear scans.
//! All access goes through a single `RwLock`, so every repository operation
//! runs as one read or write critical section.

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Company;

/// Ordered collection of companies
#[derive(Debug, Default)]
pub struct Companies(Vec<Company>);

impl Companies {
    /// Append a company. Name uniqueness is the caller's concern.
    pub fn insert(&mut self, company: Company) {
        self.0.push(company);
    }

    /// Whether any company has exactly this name
    pub fn find_by_name(&self, name: &str) -> bool {
        self.0.iter().any(|company| company.name == name)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Company> {
        self.0.iter().find(|company| company.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Company> {
        self.0.iter_mut().find(|company| company.id == id)
    }

    /// Remove the company with this id, returning it if it was present
    pub fn remove(&mut self, id: &str) -> Option<Company> {
        let position = self.0.iter().position(|company| company.id == id)?;
        Some(self.0.remove(position))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Company> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Shared, lock-guarded company collection
#[derive(Debug, Default)]
pub struct EntityStore {
    companies: RwLock<Companies>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire shared read access
    pub async fn read(&self) -> RwLockReadGuard<'_, Companies> {
        self.companies.read().await
    }

    /// Acquire exclusive write access
    pub async fn write(&self) -> RwLockWriteGuard<'_, Companies> {
        self.companies.write().await
    }

    /// Number of stored companies
    pub async fn len(&self) -> usize {
        self.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.read().await.is_empty()
    }

    /// Drop every company (and with them, every employee)
    pub async fn clear(&self) {
        self.write().await.clear();
    }
}
