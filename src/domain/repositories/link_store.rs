//! Store contract for short link persistence.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of an atomic insert-if-absent.
///
/// A taken slug is reported as `Conflict`, not as an error: whether a
/// collision is terminal (custom slug) or retryable (generated slug) is
/// the service layer's call, so the store must not collapse it into a
/// generic failure.
#[derive(Debug)]
pub enum InsertOutcome {
    Created(Link),
    Conflict,
}

/// Persistence contract consumed by the core.
///
/// Inputs are assumed valid: callers normalize and validate slugs and
/// targets before any store mutation. The store's job is atomicity —
/// no two concurrent `create_unique` calls with the same slug may both
/// succeed, and N concurrent `increment_and_get` calls must raise the
/// counter by exactly N.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - in-process reference
/// - Test mocks auto-generated with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Atomically inserts the link iff no record with the same slug exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on backend errors. A taken slug is not
    /// an error; it is [`InsertOutcome::Conflict`].
    async fn create_unique(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Point lookup by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments `clicks` by exactly 1 and returns the
    /// updated record, or `None` if the slug is absent.
    async fn increment_and_get(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Replaces the target URL, or returns `None` if the slug is absent.
    async fn update_target(&self, slug: &str, target: &str) -> Result<Option<Link>, AppError>;

    /// Sets `clicks` back to 0, or returns `None` if the slug is absent.
    async fn reset_clicks(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Removes the record. Returns `true` if it existed.
    async fn delete(&self, slug: &str) -> Result<bool, AppError>;

    /// All links, newest first (`created_at` descending).
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;
}
