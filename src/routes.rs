//! Top-level router composition.
//!
//! # Route Structure
//!
//! - `GET /{slug}` - Short link redirect (registered last so API paths win)
//! - `/api/*`      - Link management REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All routes with state applied; used directly by integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api::routes::api_routes())
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
