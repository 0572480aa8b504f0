//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`       - Redirect to the stored URL
//! - `GET    /health`        - Health check
//! - `POST   /url`           - Create a mapping
//! - `DELETE /url/{alias}`   - Delete a mapping
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Request ID** - `x-request-id` assigned when absent and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become 500 responses
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and middleware without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(api::routes::url_routes())
        .with_state(state)
        .layer(CatchPanicLayer::new())
        .layer(tracing::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}
