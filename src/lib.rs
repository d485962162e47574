//! Company API Library
//!
//! This crate provides an in-memory company and employee registry served
//! over HTTP.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod utils;

pub use config::AppConfig;
pub use db::{EntityStore, SharedStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Company store
    pub store: SharedStore,
}

impl AppState {
    /// Create state with a fresh, empty store
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: db::init_store(),
        }
    }
}

/// Build the application router with its middleware stack
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let timeout = state.config.server.request_timeout_secs;
    let router = api::routes().with_state(state);

    let router = match timeout {
        Some(secs) => router.layer(TimeoutLayer::new(Duration::from_secs(secs))),
        None => router,
    };

    router.layer(trace_layer).layer(cors)
}
