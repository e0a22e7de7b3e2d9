//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /serve/{slug}` - Banner delivery snippet (public)
//! - `GET /click`        - Click-through redirect (public)
//! - `GET /health`       - Health check: DB and stat queue (public)
//! - `/api/*`            - Management REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, separate budgets for serving
//!   traffic and the management API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{click_handler, health_handler, serve_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::admin_routes().layer(rate_limit::admin_layer());

    let public_router = Router::new()
        .route("/serve/{slug}", get(serve_handler))
        .route("/click", get(click_handler))
        .layer(rate_limit::layer());

    let router = Router::new()
        .merge(public_router)
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
