//! DTOs for link creation and management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to create a short link.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// The absolute URL the slug should redirect to.
    pub target: String,

    /// Optional custom slug; normalized and validated server-side.
    /// Absent means a random slug is generated.
    pub slug: Option<String>,
}

/// Request to replace a link's target URL.
#[derive(Debug, Deserialize)]
pub struct UpdateTargetRequest {
    pub target: String,
}

/// JSON representation of a link record.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub slug: String,
    pub target: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            slug: link.slug,
            target: link.target,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

/// Acknowledgement body for deletions.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
