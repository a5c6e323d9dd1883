//! Slug resolution with click counting.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Resolves a slug to its target, bumping the click counter on the way.
///
/// The increment rides on the store's atomic read-modify-write, so
/// concurrent resolutions never lose counts. Every resolution counts,
/// including automated ones; there is no filtering of sources.
pub struct RedirectResolver {
    store: Arc<dyn LinkStore>,
}

impl RedirectResolver {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Returns the stored target for the caller to redirect to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record exists for the slug;
    /// nothing is created or mutated in that case.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        match self.store.increment_and_get(slug).await? {
            Some(link) => {
                metrics::counter!("shorty_redirects_total").increment(1);
                Ok(link.target)
            }
            None => Err(AppError::not_found(
                "Slug not found",
                json!({ "slug": slug }),
            )),
        }
    }
}
