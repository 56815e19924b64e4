//! narratore-symbols library interface
//!
//! Dream-symbol extraction, position location and highlight segmentation,
//! exposed over HTTP for the Narratore di Sogni web client.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod symbols;

pub use crate::error::{ApiError, ApiResult};
pub use crate::symbols::SymbolService;

use axum::Router;
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Symbol pipeline with its optional text generator
    pub symbols: SymbolService,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(symbols: SymbolService) -> Self {
        Self {
            symbols,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::symbol_routes())
        .merge(api::buildinfo_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
