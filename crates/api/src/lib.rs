//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - Report download routes
//! - CEP zone lookup
//! - Error to response mapping

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use kitroute_core::reports::{ReportDataSource, ReportService};
use kitroute_db::ReportStore;
use kitroute_shared::ReportsConfig;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Report generation over the configured data source.
    pub reports: ReportService,
}

impl AppState {
    /// Builds the state around a data source.
    pub fn new(source: Arc<dyn ReportDataSource>, settings: ReportsConfig) -> Self {
        Self {
            reports: ReportService::new(source, settings),
        }
    }

    /// Builds the state over Postgres.
    pub fn from_db(db: DatabaseConnection, settings: ReportsConfig) -> Self {
        Self::new(Arc::new(ReportStore::new(db)), settings)
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
