//! PostgreSQL implementation of the link store.
//!
//! Atomicity comes from the database: insert-if-absent is an
//! `INSERT .. ON CONFLICT DO NOTHING`, and the click increment is a
//! single `UPDATE .. SET clicks = clicks + 1 .. RETURNING` statement.
//! Queries are bound at runtime so the crate builds without a live
//! database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkStore};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LinkRow {
    slug: String,
    target: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.slug, row.target, row.clicks, row.created_at)
    }
}

/// PostgreSQL store for link persistence.
pub struct PgLinkStore {
    pool: Arc<PgPool>,
}

impl PgLinkStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn create_unique(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (slug, target)
            VALUES ($1, $2)
            ON CONFLICT (slug) DO NOTHING
            RETURNING slug, target, clicks, created_at
            "#,
        )
        .bind(&new_link.slug)
        .bind(&new_link.target)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(match row {
            Some(row) => InsertOutcome::Created(row.into()),
            None => InsertOutcome::Conflict,
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT slug, target, clicks, created_at FROM links WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_and_get(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET clicks = clicks + 1
            WHERE slug = $1
            RETURNING slug, target, clicks, created_at
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn update_target(&self, slug: &str, target: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET target = $2
            WHERE slug = $1
            RETURNING slug, target, clicks, created_at
            "#,
        )
        .bind(slug)
        .bind(target)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn reset_clicks(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET clicks = 0
            WHERE slug = $1
            RETURNING slug, target, clicks, created_at
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE slug = $1")
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            "SELECT slug, target, clicks, created_at FROM links ORDER BY created_at DESC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
