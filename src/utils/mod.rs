//! Pure helper functions used across the application.
//!
//! - [`slug`] - Slug generation, normalization, and validation
//! - [`target_url`] - Target URL validation
//!
//! Everything here is side-effect free (apart from drawing randomness)
//! and independently testable; services call these before any store
//! mutation, so stores can assume valid input.

pub mod slug;
pub mod target_url;
