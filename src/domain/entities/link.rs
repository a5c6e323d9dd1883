//! Link entity representing a slug-to-URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A short link with its visit counter.
///
/// `slug` is the unique key. It is always stored normalized: lowercase,
/// `[a-z0-9-]`, 2 to 64 characters. `clicks` only moves up, except for an
/// explicit reset which sets it back to exactly 0.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub slug: String,
    pub target: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(slug: String, target: String, clicks: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            target,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// The store sets `clicks = 0` and stamps `created_at`; callers only
/// provide the already-validated slug and target.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub slug: String,
    pub target: String,
}
