//! CPU engine definition and initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! whole machine state. It coordinates the following:
//! 1. **State:** Register file, program counter, cache-enable flag.
//! 2. **Memory Hierarchy:** One owned cache in front of one owned memory bus.
//! 3. **Statistics:** Instructions executed and cache hit/miss counters.

/// Instruction execution: dispatch, control flow, and the run loop.
pub mod execution;

/// Load/store path: address formation and cache/bus orchestration.
pub mod memory;

use crate::common::error::BuildError;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::units::Cache;
use crate::soc::MemoryBus;
use crate::stats::SimStats;

pub use execution::{PC_STEP, Signal};

/// The CPU engine.
///
/// Each instance exclusively owns its register file, cache, and memory bus;
/// engines never share state. Construct as many independent machines as
/// needed (one per test, for instance).
pub struct Cpu {
    /// Register file; all zero at construction.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: usize,
    /// When false, loads and stores bypass the cache.
    pub cache_enabled: bool,
    /// The cache in front of the memory bus.
    pub cache: Cache,
    /// The flat memory bus.
    pub bus: MemoryBus,
    /// Run statistics; reset only by constructing a new CPU.
    pub stats: SimStats,
}

impl Cpu {
    /// Builds a CPU from the given configuration.
    ///
    /// Caching starts disabled; the `CACHE,1` instruction enables it.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] when the configuration fails validation;
    /// nothing is constructed in that case.
    pub fn new(config: &Config) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self {
            regs: RegisterFile::new(config.cpu.num_registers),
            pc: 0,
            cache_enabled: false,
            cache: Cache::new(&config.cache),
            bus: MemoryBus::new(&config.memory),
            stats: SimStats::default(),
        })
    }

    /// Dumps the current machine state (counter and registers) to stdout.
    pub fn dump_state(&self) {
        println!("PC = {}", self.pc);
        self.regs.dump();
    }
}
