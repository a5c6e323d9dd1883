//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its target URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Every hit increments the link's click counter atomically, whatever
/// the source; the count and the lookup are one store operation, so
/// concurrent hits are never lost.
///
/// # Responses
///
/// - **302 Found** with a `Location` header
/// - **404** `not_found` (nothing is created or mutated)
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target = state.redirect_resolver.resolve(&slug).await?;

    tracing::debug!(slug, target, "redirecting");

    // axum's Redirect helper only offers 303/307/308; this API promises
    // a plain 302 Found.
    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}
