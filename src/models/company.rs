//! Company data model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Employee;

/// A company and the employees it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier, assigned at creation and never changed
    #[serde(rename = "companyID")]
    pub id: String,

    /// Company name (unique among companies at creation time)
    pub name: String,

    /// Employees owned by this company; `None` until the first one is added
    pub employees: Option<Vec<Employee>>,
}

impl Company {
    /// Create a company with a freshly generated identifier and no employees
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            employees: None,
        }
    }

    /// Number of employees currently owned by the company
    pub fn employee_count(&self) -> usize {
        self.employees.as_ref().map_or(0, Vec::len)
    }
}

/// Request to create a new company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
}

/// Partial update of a company; a missing or null name keeps the stored one
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Query parameters accepted by the company listing endpoint
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyListQuery {
    pub page_size: Option<i64>,
    /// 1-based page number
    pub page_index: Option<i64>,
}

impl CompanyListQuery {
    /// Inclusive window of zero-based positions selected by this query.
    ///
    /// Returns `None` when either parameter is missing, meaning the whole
    /// collection is selected. The window may be empty or lie entirely
    /// outside the collection; callers treat that as an empty page.
    pub fn window(&self) -> Option<(i64, i64)> {
        let (size, index) = (self.page_size?, self.page_index?);
        let start = index.saturating_sub(1).saturating_mul(size);
        let end = start.saturating_add(size).saturating_sub(1);
        Some((start, end))
    }

    /// Apply the page window to an ordered sequence
    pub fn paginate<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        match self.window() {
            None => items.into_iter().collect(),
            Some((start, end)) => items
                .into_iter()
                .enumerate()
                .filter(|(position, _)| {
                    let position = *position as i64;
                    position >= start && position <= end
                })
                .map(|(_, item)| item)
                .collect(),
        }
    }
}
