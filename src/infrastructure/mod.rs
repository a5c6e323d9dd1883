//! Infrastructure layer implementing domain contracts.
//!
//! - [`persistence`] - Link store implementations (PostgreSQL, in-memory)

pub mod persistence;
