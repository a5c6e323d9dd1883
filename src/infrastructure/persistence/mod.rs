//! Concrete link store implementations.
//!
//! - [`PgLinkStore`] - PostgreSQL, used when `DATABASE_URL` is configured
//! - [`MemoryLinkStore`] - in-process reference implementation and test store
//!
//! Both uphold the [`crate::domain::repositories::LinkStore`] atomicity
//! contract; they differ only in where the data lives.

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
