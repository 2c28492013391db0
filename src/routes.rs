//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Health check: record store, text extractor
//! - `/api/*`        - REST API (registration, listing, validation)
//!
//! Unknown paths get a JSON `not_found` error.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::Uri;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and middleware, without path normalization.
///
/// `body_limit` caps JSON request bodies; it must leave room for a base64
/// encoded identity document.
pub fn router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, body_limit: usize) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, body_limit))
}

async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
