//! Hardware units owned by the CPU core.

/// Associative cache table and eviction policies.
pub mod cache;

pub use cache::Cache;
