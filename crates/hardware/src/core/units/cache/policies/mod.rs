//! Cache eviction policies.
//!
//! Implements the victim-selection algorithms for the fully-associative
//! cache table.
//!
//! # Policies
//!
//! - `Lfu`: Least Frequently Used.
//! - `Lru`: Least Recently Used.

/// Least Frequently Used eviction policy.
pub mod lfu;

/// Least Recently Used eviction policy.
pub mod lru;

pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

/// Trait for cache eviction policies.
///
/// The policy tracks per-slot access history; the cache table owns the keys
/// and values. Slot indices are stable for the lifetime of the cache.
pub trait EvictionPolicy: Send + Sync {
    /// Records an access (lookup hit or store) to `slot`.
    fn update(&mut self, slot: usize);

    /// Selects the slot to evict.
    fn victim(&mut self) -> usize;

    /// Forgets `slot`'s access history after its entry is evicted.
    fn invalidate(&mut self, slot: usize);

    /// Resets all access history to the post-flush baseline.
    fn clear(&mut self);
}
