//! Link creation and management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkStore};
use crate::error::AppError;
use crate::utils::slug::{is_valid_slug, normalize_slug, random_slug};
use crate::utils::target_url::validate_target;

/// Bound on random-slug generation attempts when the store reports a
/// collision. Exhausting it means the store is near saturation for the
/// generated length.
const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Orchestrates link creation, listing, target updates, and deletion.
///
/// All validation happens here, before any store call: the target must
/// be an absolute http/https URL, and a custom slug must survive
/// normalization and pass the charset/length check. Uniqueness is
/// enforced by the store's atomic insert; this service only decides how
/// to react to a collision (fail for custom slugs, regenerate for
/// random ones).
pub struct LinkService {
    store: Arc<dyn LinkStore>,
}

impl LinkService {
    pub fn new(store: Arc<dyn LinkStore>) -> Self {
        Self { store }
    }

    /// Creates a short link.
    ///
    /// # Slug resolution
    ///
    /// - Custom slug: normalized, validated, inserted once. A collision
    ///   is terminal ([`AppError::SlugTaken`]) — the caller chose the
    ///   name, so retrying cannot help.
    /// - No slug: a random 6-8 character slug is generated and inserted,
    ///   retrying with a fresh slug up to [`MAX_GENERATION_ATTEMPTS`]
    ///   times on collision before failing with
    ///   [`AppError::ExhaustedRetries`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidTarget`] or [`AppError::InvalidSlug`]
    /// before any store call when the input is malformed.
    pub async fn create_link(
        &self,
        target: String,
        custom_slug: Option<String>,
    ) -> Result<Link, AppError> {
        let target = target.trim().to_string();
        validate_target(&target).map_err(|e| AppError::invalid_target(e.to_string()))?;

        let link = match custom_slug {
            Some(raw) => self.create_with_custom_slug(target, &raw).await?,
            None => self.create_with_generated_slug(target).await?,
        };

        metrics::counter!("shorty_links_created_total").increment(1);

        Ok(link)
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.store.list_all().await
    }

    /// Replaces the target URL of an existing link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidTarget`] for a malformed target and
    /// [`AppError::NotFound`] if the slug has no record.
    pub async fn update_target(&self, slug: &str, target: String) -> Result<Link, AppError> {
        let target = target.trim().to_string();
        validate_target(&target).map_err(|e| AppError::invalid_target(e.to_string()))?;

        let slug = normalize_slug(slug);
        self.store
            .update_target(&slug, &target)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "slug": slug })))
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug has no record.
    pub async fn delete_link(&self, slug: &str) -> Result<(), AppError> {
        let slug = normalize_slug(slug);
        if self.store.delete(&slug).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Link not found",
                json!({ "slug": slug }),
            ))
        }
    }

    async fn create_with_custom_slug(&self, target: String, raw: &str) -> Result<Link, AppError> {
        let slug = normalize_slug(raw);
        if slug.is_empty() || !is_valid_slug(&slug) {
            return Err(AppError::invalid_slug(json!({
                "provided": raw,
                "normalized": slug,
            })));
        }

        match self
            .store
            .create_unique(NewLink {
                slug: slug.clone(),
                target,
            })
            .await?
        {
            InsertOutcome::Created(link) => Ok(link),
            // User-chosen slug: the collision is terminal, no retry.
            InsertOutcome::Conflict => Err(AppError::slug_taken(slug)),
        }
    }

    async fn create_with_generated_slug(&self, target: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let slug = random_slug();

            match self
                .store
                .create_unique(NewLink {
                    slug,
                    target: target.clone(),
                })
                .await?
            {
                InsertOutcome::Created(link) => return Ok(link),
                InsertOutcome::Conflict => {
                    tracing::debug!(attempt, "generated slug collided, retrying");
                }
            }
        }

        Err(AppError::ExhaustedRetries {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}
