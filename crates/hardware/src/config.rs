//! Configuration system for the simulator.
//!
//! This module defines all configuration structures and enums used to
//! parameterize the machine. It provides:
//! 1. **Defaults:** Baseline hardware constants (register count, cache capacity, memory size).
//! 2. **Structures:** Sectioned config for general, CPU, cache, and memory settings.
//! 3. **Enums:** Cache eviction and write policy types.
//! 4. **Validation:** The construction-time fail-fast gate.
//!
//! Configuration is supplied as JSON (the CLI's `--config` file) or via
//! `Config::default()`.

use serde::Deserialize;

use crate::common::error::BuildError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine when not explicitly overridden
/// in a configuration file.
mod defaults {
    /// Number of registers in the register file.
    ///
    /// Index 7 doubles as the link register, so the file must at least
    /// reach it for `JAL` to be usable.
    pub const NUM_REGISTERS: usize = 9;

    /// Number of entries the cache holds.
    pub const CACHE_CAPACITY: usize = 16;

    /// Number of cells on the memory bus.
    ///
    /// The address width is derived from this count unless overridden.
    pub const MEMORY_BUS_SIZE: usize = 128;
}

/// Cache eviction policy algorithms.
///
/// Selects which cache entry to remove when capacity is exceeded and a new
/// key must be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvictionPolicy {
    /// Least Frequently Used.
    ///
    /// Evicts the entry with the minimum access count. Ties are broken by
    /// table order: the lowest slot index wins.
    #[default]
    #[serde(alias = "Lfu")]
    Lfu,

    /// Least Recently Used.
    ///
    /// Evicts the entry that was accessed least recently. Both lookups and
    /// stores refresh recency.
    #[serde(alias = "Lru")]
    Lru,
}

/// Cache write policy.
///
/// Governs whether a cache write is mirrored to the backing memory bus
/// immediately or tracked with a dirty marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Writes reach the memory bus immediately.
    #[default]
    #[serde(alias = "WriteThrough")]
    WriteThrough,

    /// Writes mark the entry dirty instead of being mirrored.
    ///
    /// Dirty entries are tracked but never drained: the store instruction
    /// always writes through to the bus regardless of this policy.
    #[serde(alias = "WriteBack")]
    WriteBack,
}

/// Root configuration for one machine instance.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{Config, EvictionPolicy, WritePolicy};
///
/// let json = r#"{
///     "general": { "trace": true },
///     "cpu":     { "num_registers": 12 },
///     "cache":   { "capacity": 4, "eviction_policy": "LRU", "write_policy": "write-back" },
///     "memory":  { "size": 64 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace);
/// assert_eq!(config.cpu.num_registers, 12);
/// assert_eq!(config.cache.eviction_policy, EvictionPolicy::Lru);
/// assert_eq!(config.cache.write_policy, WritePolicy::WriteBack);
/// assert_eq!(config.memory.size, 64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// CPU engine configuration.
    #[serde(default)]
    pub cpu: CpuConfig,
    /// Cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Memory bus configuration.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Validates the configuration before a machine is built from it.
    ///
    /// This is the construction-time fail-fast gate: a CPU is never
    /// constructed from a configuration that fails here.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] found: a register file, cache, or
    /// memory bus of size zero, or an explicit address width too narrow to
    /// reach every configured memory cell.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.cpu.num_registers == 0 {
            return Err(BuildError::InvalidRegisterCount(self.cpu.num_registers));
        }
        if self.cache.capacity == 0 {
            return Err(BuildError::InvalidCacheCapacity(self.cache.capacity));
        }
        if self.memory.size == 0 {
            return Err(BuildError::InvalidMemorySize(self.memory.size));
        }
        if let Some(bit_width) = self.memory.bit_width {
            let addressable = if bit_width >= usize::BITS as usize {
                usize::MAX
            } else {
                1 << bit_width
            };
            if addressable < self.memory.size {
                return Err(BuildError::NarrowAddressWidth {
                    bit_width,
                    size: self.memory.size,
                });
            }
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Enable the per-instruction trace channel (dispatches, register
    /// updates, cache hits/misses/evictions, bus traffic).
    #[serde(default)]
    pub trace: bool,
}

/// CPU engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CpuConfig {
    /// Number of registers in the register file.
    #[serde(default = "CpuConfig::default_num_registers")]
    pub num_registers: usize,
}

impl CpuConfig {
    /// Returns the default register count.
    fn default_num_registers() -> usize {
        defaults::NUM_REGISTERS
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            num_registers: defaults::NUM_REGISTERS,
        }
    }
}

/// Cache configuration, fixed at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Number of entries the cache holds.
    #[serde(default = "CacheConfig::default_capacity")]
    pub capacity: usize,

    /// Eviction policy.
    #[serde(default)]
    pub eviction_policy: EvictionPolicy,

    /// Write policy.
    #[serde(default)]
    pub write_policy: WritePolicy,
}

impl CacheConfig {
    /// Returns the default cache capacity.
    fn default_capacity() -> usize {
        defaults::CACHE_CAPACITY
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::CACHE_CAPACITY,
            eviction_policy: EvictionPolicy::default(),
            write_policy: WritePolicy::default(),
        }
    }
}

/// Memory bus configuration, fixed at construction.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Number of cells on the bus, all pre-allocated and zeroed.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Explicit address width in bits.
    ///
    /// When unset, the width is derived from `size` (at least 8 bits). An
    /// explicit width drives both cell initialization and live address
    /// validation, and must be able to reach every configured cell.
    #[serde(default)]
    pub bit_width: Option<usize>,
}

impl MemoryConfig {
    /// Returns the default memory bus size.
    fn default_size() -> usize {
        defaults::MEMORY_BUS_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_BUS_SIZE,
            bit_width: None,
        }
    }
}
