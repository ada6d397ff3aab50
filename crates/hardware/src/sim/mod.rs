//! Simulation glue: program and data file loading.

/// Program/data file loading and memory seeding.
pub mod loader;
