//! In-process reference implementation of the link store.
//!
//! Backs the service when no database is configured, and serves as the
//! store under test for handler integration tests. A single mutex held
//! across each operation provides the contract's atomicity: insert-if-
//! absent and increment cannot interleave, so no two concurrent creates
//! for one slug succeed and no increment is lost.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkStore};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    links: HashMap<String, Entry>,
    /// Monotonic insertion counter; breaks `created_at` ties so
    /// `list_all` ordering stays deterministic.
    next_seq: u64,
}

struct Entry {
    link: Link,
    seq: u64,
}

/// Mutex-protected map keyed by slug.
#[derive(Default)]
pub struct MemoryLinkStore {
    inner: Mutex<Inner>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoning panic cannot leave the map half-updated; recover.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn create_unique(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let mut inner = self.lock();

        if inner.links.contains_key(&new_link.slug) {
            return Ok(InsertOutcome::Conflict);
        }

        let link = Link::new(new_link.slug.clone(), new_link.target, 0, Utc::now());
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.links.insert(
            new_link.slug,
            Entry {
                link: link.clone(),
                seq,
            },
        );

        Ok(InsertOutcome::Created(link))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.lock().links.get(slug).map(|e| e.link.clone()))
    }

    async fn increment_and_get(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let mut inner = self.lock();

        Ok(inner.links.get_mut(slug).map(|e| {
            e.link.clicks += 1;
            e.link.clone()
        }))
    }

    async fn update_target(&self, slug: &str, target: &str) -> Result<Option<Link>, AppError> {
        let mut inner = self.lock();

        Ok(inner.links.get_mut(slug).map(|e| {
            e.link.target = target.to_string();
            e.link.clone()
        }))
    }

    async fn reset_clicks(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let mut inner = self.lock();

        Ok(inner.links.get_mut(slug).map(|e| {
            e.link.clicks = 0;
            e.link.clone()
        }))
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        Ok(self.lock().links.remove(slug).is_some())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let inner = self.lock();

        let mut entries: Vec<_> = inner
            .links
            .values()
            .map(|e| (e.link.clone(), e.seq))
            .collect();
        entries.sort_by(|a, b| b.0.created_at.cmp(&a.0.created_at).then(b.1.cmp(&a.1)));

        Ok(entries.into_iter().map(|(link, _)| link).collect())
    }
}
