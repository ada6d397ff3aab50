//! System interconnect: the flat memory bus behind the CPU.

/// Flat memory bus keyed by fixed-width binary-string addresses.
pub mod memory;

pub use memory::MemoryBus;
