//! Test world for Cucumber scenarios

use std::collections::HashMap;

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use cucumber::World;
use tower::ServiceExt;

use company_api::{config::AppConfig, create_router, AppState};

/// Test world that maintains state across scenario steps
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct TestWorld {
    /// Router over a store private to this scenario
    router: Router,

    /// Company ids by name, as created by the scenario
    pub companies: HashMap<String, String>,

    /// Employee ids by name, with the id of the owning company
    pub employees: HashMap<String, EmployeeRef>,

    /// Response from last API call
    pub last_response: Option<TestResponse>,
}

#[derive(Debug, Clone)]
pub struct EmployeeRef {
    pub company_id: String,
    pub employee_id: String,
}

#[derive(Debug, Clone)]
pub struct TestResponse {
    pub status: u16,
    pub location: Option<String>,
    /// Parsed JSON body, `Null` when the body is empty
    pub body: serde_json::Value,
}

impl TestWorld {
    pub fn new() -> Self {
        Self {
            router: create_router(AppState::new(AppConfig::default())),
            companies: HashMap::new(),
            employees: HashMap::new(),
            last_response: None,
        }
    }

    /// Send a request and remember the response
    pub async fn send(
        &mut self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> &TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        self.last_response.insert(TestResponse {
            status,
            location,
            body,
        })
    }

    /// The last response, panicking if no request was made yet
    pub fn response(&self) -> &TestResponse {
        self.last_response.as_ref().expect("No response available")
    }

    /// Id of a company created earlier in the scenario
    pub fn company_id(&self, name: &str) -> String {
        self.companies
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("Company {:?} was not created in this scenario", name))
    }

    pub fn employee(&self, name: &str) -> EmployeeRef {
        self.employees
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("Employee {:?} was not added in this scenario", name))
    }

    /// Names of the items in a JSON array body
    pub fn names_in_response(&self) -> Vec<String> {
        self.response()
            .body
            .as_array()
            .expect("Response body is not an array")
            .iter()
            .filter_map(|item| item["name"].as_str().map(str::to_string))
            .collect()
    }
}
