//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, health_handler, list_links_handler,
    reset_clicks_handler, stats_handler, update_link_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`                     - Create a short link
/// - `GET    /links`                     - List links, newest first
/// - `PUT    /links/{slug}`              - Replace a link's target
/// - `DELETE /links/{slug}`              - Delete a link
/// - `GET    /links/{slug}/stats`        - Link record with click count
/// - `POST   /links/{slug}/reset-clicks` - Zero the click counter
/// - `GET    /health`                    - Liveness probe
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route(
            "/links/{slug}",
            delete(delete_link_handler).put(update_link_handler),
        )
        .route("/links/{slug}/stats", get(stats_handler))
        .route("/links/{slug}/reset-clicks", post(reset_clicks_handler))
        .route("/health", get(health_handler))
}
