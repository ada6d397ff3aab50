//! Cache tests.

/// Eviction policy victim selection in isolation.
pub mod policies;
