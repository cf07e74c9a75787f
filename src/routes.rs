//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{key}`   - Short key redirect
//! - `GET  /`        - Empty key, rejected with 400
//! - `GET  /-/health` - Backend client readiness (the `-` segment keeps it
//!   clear of single-segment keys, so a key named `health` still redirects)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{empty_key_handler, health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(empty_key_handler))
        .route("/-/health", get(health_handler))
        .route("/{key}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed before
/// routing, so `/abc/` resolves the key `abc`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
