//! Pharmadash Library
//!
//! Hospital pharmaceutical dashboard back end: static sample records run
//! through a filter and aggregation engine and served as JSON page views,
//! next to a simulated live-metrics generator.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod aggregate;
pub mod config;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod health;
pub mod logging;
pub mod middleware_helpers;
pub mod models;
pub mod services;
pub mod simulation;
pub mod store;
pub mod tracing;

use axum::{http::Uri, response::Json, Router};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::{
    health::HealthState, logging::LoggingState, simulation::SimulationHandle, store::RecordStore,
};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
    pub simulation: Arc<SimulationHandle>,
    pub health: Arc<HealthState>,
}

impl AppState {
    pub fn new(
        config: config::AppConfig,
        store: Arc<RecordStore>,
        simulation: Arc<SimulationHandle>,
    ) -> Self {
        Self {
            services: handlers::AppServices::new(store, &config),
            health: Arc::new(HealthState::new(Arc::clone(&simulation))),
            simulation,
            config,
        }
    }
}

// Common response wrappers
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            request_id: crate::tracing::current_request_id().map(|rid| rid.as_str().to_string()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }
}


/// Standard API result type for JSON responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, errors::ServiceError>;

/// Every page route, without middleware
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .merge(handlers::dashboard::dashboard_routes())
        .merge(handlers::inventory::inventory_routes())
        .merge(handlers::suppliers::supplier_routes())
        .merge(handlers::usage_logs::usage_log_routes())
        .merge(handlers::expenses::expense_routes())
        .merge(handlers::analytics::analytics_routes())
        .merge(handlers::simulation::simulation_routes())
        .merge(handlers::verification::verification_routes())
}

/// Full application router: pages, health, the not-found fallback and the
/// request-scoped middleware (request id, HTTP tracing, access log).
pub fn app_router(state: AppState, access_logger: slog::Logger) -> Router {
    let logging_state = Arc::new(LoggingState::new(access_logger));

    page_routes()
        .nest("/health", health::health_routes(Arc::clone(&state.health)))
        .fallback(not_found)
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            logging_state,
            logging::logging_middleware,
        ))
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
}

async fn not_found(uri: Uri) -> errors::ServiceError {
    errors::ServiceError::NotFound(format!("No page at {}", uri.path()))
}
