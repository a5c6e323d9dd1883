//! Application error taxonomy and HTTP mapping.
//!
//! Every failure surfaced by the service carries a stable error kind.
//! Validation errors are produced before any store call; store-level
//! uniqueness conflicts never reach this type (they travel as
//! [`crate::domain::repositories::InsertOutcome::Conflict`] so the
//! service layer can pick the right retry policy).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Service-level errors, one variant per stable error kind.
///
/// `Store` is the only kind an external caller may treat as transient;
/// the rest are terminal without changing the input.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Target is not an absolute http/https URL.
    #[error("invalid target URL: {reason}")]
    InvalidTarget { reason: String },

    /// Custom slug fails charset/length validation after normalization.
    #[error("invalid slug format")]
    InvalidSlug { details: Value },

    /// User-chosen slug already exists. Terminal, never retried.
    #[error("slug already taken")]
    SlugTaken { slug: String },

    /// Random generation collided on every bounded attempt.
    #[error("could not generate a unique slug")]
    ExhaustedRetries { attempts: usize },

    /// No record for the given key.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Underlying persistence unavailable or errored.
    #[error("store failure: {0}")]
    Store(#[from] sqlx::Error),
}

impl AppError {
    pub fn invalid_target(reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            reason: reason.into(),
        }
    }

    pub fn invalid_slug(details: Value) -> Self {
        Self::InvalidSlug { details }
    }

    pub fn slug_taken(slug: impl Into<String>) -> Self {
        Self::SlugTaken { slug: slug.into() }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidTarget { .. } => "invalid_target",
            Self::InvalidSlug { .. } => "invalid_slug",
            Self::SlugTaken { .. } => "slug_taken",
            Self::ExhaustedRetries { .. } => "exhausted_retries",
            Self::NotFound { .. } => "not_found",
            Self::Store(_) => "store_failure",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidTarget { .. } | Self::InvalidSlug { .. } => StatusCode::BAD_REQUEST,
            Self::SlugTaken { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ExhaustedRetries { .. } | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let details = match self {
            Self::InvalidTarget { reason } => json!({ "reason": reason }),
            Self::InvalidSlug { details } => details.clone(),
            Self::SlugTaken { slug } => json!({ "slug": slug }),
            Self::ExhaustedRetries { attempts } => json!({ "attempts": attempts }),
            Self::NotFound { details, .. } => details.clone(),
            // Driver detail stays in the logs, not the response body.
            Self::Store(_) => json!({}),
        };

        ErrorInfo {
            code: self.code(),
            message: match self {
                Self::Store(_) => "Store failure".to_string(),
                other => other.to_string(),
            },
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Store(e) = &self {
            tracing::error!("store failure: {e}");
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
