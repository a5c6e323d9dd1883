//! Per-link statistics and counter reset.
//!
//! Pass-through reads against the store; the only logic here is slug
//! normalization of path parameters and the not-found mapping.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::slug::normalize_slug;

pub struct StatsService {
    store: Arc<dyn LinkStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Returns the full record for a slug without touching the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug has no record.
    pub async fn stats(&self, slug: &str) -> Result<Link, AppError> {
        let slug = normalize_slug(slug);
        self.store
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "slug": slug })))
    }

    /// Sets the click counter back to exactly 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug has no record.
    pub async fn reset_clicks(&self, slug: &str) -> Result<Link, AppError> {
        let slug = normalize_slug(slug);
        self.store
            .reset_clicks(&slug)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "slug": slug })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;
    use chrono::Utc;

    #[tokio::test]
    async fn test_stats_normalizes_path_slug() {
        let mut store = MockLinkStore::new();
        store
            .expect_find_by_slug()
            .withf(|slug| slug == "my-promo")
            .times(1)
            .returning(|slug| {
                Ok(Some(Link::new(
                    slug.to_string(),
                    "https://a.com".to_string(),
                    7,
                    Utc::now(),
                )))
            });

        let service = StatsService::new(Arc::new(store));
        let link = service.stats("My Promo!").await.unwrap();

        assert_eq!(link.clicks, 7);
    }

    #[tokio::test]
    async fn test_stats_not_found() {
        let mut store = MockLinkStore::new();
        store.expect_find_by_slug().times(1).returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(store));
        assert!(matches!(
            service.stats("missing").await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_reset_clicks_returns_zeroed_link() {
        let mut store = MockLinkStore::new();
        store.expect_reset_clicks().times(1).returning(|slug| {
            Ok(Some(Link::new(
                slug.to_string(),
                "https://a.com".to_string(),
                0,
                Utc::now(),
            )))
        });

        let service = StatsService::new(Arc::new(store));
        let link = service.reset_clicks("ab").await.unwrap();

        assert_eq!(link.clicks, 0);
    }
}
