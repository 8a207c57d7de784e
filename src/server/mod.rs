//! HTTP server: router construction and application state

pub mod handlers;

use crate::core::service::ListingService;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state for the HTTP layer
///
/// The record store is read-only at runtime; cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    pub listing: Arc<ListingService>,
}

impl AppState {
    pub fn new(listing: ListingService) -> Self {
        Self {
            listing: Arc::new(listing),
        }
    }
}

/// Build the application router
///
/// - `GET /api/companies` — filtered company listing
/// - `GET /health` — liveness probe
///
/// CORS is permissive: the API backs a browser frontend served from a
/// different origin in development.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/companies", get(handlers::list_companies))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
