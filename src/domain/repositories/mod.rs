//! Repository trait definitions for the domain layer.
//!
//! The [`LinkStore`] trait is the persistence contract the core depends
//! on; concrete implementations live in
//! [`crate::infrastructure::persistence`]. A mock implementation is
//! auto-generated via `mockall` for service unit tests.

pub mod link_store;

pub use link_store::{InsertOutcome, LinkStore};

#[cfg(test)]
pub use link_store::MockLinkStore;
