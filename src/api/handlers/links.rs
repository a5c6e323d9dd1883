//! Handlers for link management endpoints (create, list, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::link::{CreateLinkRequest, DeleteResponse, LinkResponse, UpdateTargetRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "target": "https://example.com", "slug": "my-promo" }
/// ```
///
/// `slug` is optional; when absent a random 6-8 character slug is
/// generated, retrying on collision.
///
/// # Responses
///
/// - **201 Created** with the link record
/// - **400** `invalid_target` / `invalid_slug`
/// - **409** `slug_taken` (custom slug already exists, not retried)
/// - **500** `exhausted_retries` (generation collided on every attempt)
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state
        .link_service
        .create_link(payload.target, payload.slug)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Lists all links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(Into::into).collect()))
}

/// Replaces the target URL of an existing link.
///
/// # Endpoint
///
/// `PUT /api/links/{slug}`
///
/// # Responses
///
/// - **200 OK** with the updated record
/// - **400** `invalid_target`
/// - **404** `not_found`
pub async fn update_link_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateTargetRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state
        .link_service
        .update_target(&slug, payload.target)
        .await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{slug}`
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete_link(&slug).await?;

    Ok(Json(DeleteResponse { ok: true }))
}
