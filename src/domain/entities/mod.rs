//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! input is split into its own struct (`NewLink`) so stores never see a
//! half-built `Link`.

pub mod link;

pub use link::{Link, NewLink};
