//! Hardware unit tests.

/// Associative cache table and eviction policies.
pub mod cache;
