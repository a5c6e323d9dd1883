//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkStore`]
//! contract and provide a clean API for HTTP handlers:
//!
//! - [`services::LinkService`] - creation, listing, updates, deletion
//! - [`services::RedirectResolver`] - slug resolution with click counting
//! - [`services::StatsService`] - stats reads and counter reset

pub mod services;
