//! Handlers for per-link statistics and counter reset.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the record for a slug without counting a visit.
///
/// # Endpoint
///
/// `GET /api/links/{slug}/stats`
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.stats_service.stats(&slug).await?;

    Ok(Json(link.into()))
}

/// Resets a link's click counter to 0.
///
/// # Endpoint
///
/// `POST /api/links/{slug}/reset-clicks`
pub async fn reset_clicks_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.stats_service.reset_clicks(&slug).await?;

    Ok(Json(link.into()))
}
