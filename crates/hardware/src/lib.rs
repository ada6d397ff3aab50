//! MIPS-subset CPU simulator library.
//!
//! This crate implements an instructional register-machine simulator with the following:
//! 1. **Core:** Fetch/decode/dispatch engine, register file, and program counter.
//! 2. **Memory:** An associative cache with pluggable eviction and write policies,
//!    in front of a flat memory bus addressed by fixed-width binary strings.
//! 3. **ISA:** Text decoding and execution for the eleven-opcode MIPS-like subset.
//! 4. **Simulation:** Program/data loaders, configuration, and statistics collection.

/// Common types (bus addresses, register file, error tiers).
pub mod common;
/// Simulator configuration (defaults, policy enums, sectioned config structures).
pub mod config;
/// CPU core (engine state, execution, load/store path, cache).
pub mod core;
/// Instruction set (decode, instruction representation, register conventions).
pub mod isa;
/// Program and data file loading.
pub mod sim;
/// System interconnect (memory bus).
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns the register file, cache, memory bus, and stats.
pub use crate::core::Cpu;
/// Flat memory bus keyed by fixed-width binary-string addresses.
pub use crate::soc::MemoryBus;
