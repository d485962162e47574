//! API routes and handlers
//!
//! This module defines all API endpoints and their routing.

use axum::{routing::get, Router};

use crate::AppState;

mod companies;
mod employees;
mod health;

pub use health::*;

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/detailed", get(health::health_check_detailed))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
}

/// Company and nested employee resources
pub fn resource_routes() -> Router<AppState> {
    Router::new().nest(
        "/Companies",
        companies::routes().merge(employees::routes()),
    )
}

/// Create the full API router
pub fn routes() -> Router<AppState> {
    health_routes().merge(resource_routes())
}
