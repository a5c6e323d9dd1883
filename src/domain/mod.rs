//! Domain layer containing business entities and store contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or
//! presentation layers; cross-request invariants (slug uniqueness,
//! exact click counts) are expressed as contract requirements on
//! [`repositories::LinkStore`] and honored by its implementations.

pub mod entities;
pub mod repositories;
