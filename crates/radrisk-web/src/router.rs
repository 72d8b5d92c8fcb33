//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    page::{index, stylesheet},
    api::{api_sources, api_curves, api_estimate},
    update::update,
    system::health,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Page
        .route("/", get(index))
        .route("/static/css/main.css", get(stylesheet))

        // Reactive update channel
        .route("/api/update", post(update))

        // API endpoints
        .route("/api/sources",  get(api_sources))
        .route("/api/curves",   get(api_curves))
        .route("/api/estimate", get(api_estimate))
        .route("/health",       get(health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
