//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and the
//! construction-time validation gate.

use mipsim_core::common::BuildError;
use mipsim_core::config::{Config, EvictionPolicy, WritePolicy};
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace);
    assert_eq!(config.cpu.num_registers, 9);
    assert_eq!(config.cache.capacity, 16);
    assert_eq!(config.cache.eviction_policy, EvictionPolicy::Lfu);
    assert_eq!(config.cache.write_policy, WritePolicy::WriteThrough);
    assert_eq!(config.memory.size, 128);
    assert_eq!(config.memory.bit_width, None);
}

#[test]
fn test_default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_json_deserialization_full() {
    let json = r#"{
        "general": { "trace": true },
        "cpu":     { "num_registers": 12 },
        "cache":   { "capacity": 4, "eviction_policy": "LRU", "write_policy": "write-back" },
        "memory":  { "size": 64, "bit_width": 10 }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert!(config.general.trace);
    assert_eq!(config.cpu.num_registers, 12);
    assert_eq!(config.cache.capacity, 4);
    assert_eq!(config.cache.eviction_policy, EvictionPolicy::Lru);
    assert_eq!(config.cache.write_policy, WritePolicy::WriteBack);
    assert_eq!(config.memory.size, 64);
    assert_eq!(config.memory.bit_width, Some(10));
}

#[test]
fn test_json_deserialization_empty_is_default() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.cpu.num_registers, 9);
    assert_eq!(config.cache.capacity, 16);
    assert_eq!(config.memory.size, 128);
}

#[test]
fn test_json_partial_section() {
    let config: Config = serde_json::from_str(r#"{ "cache": { "capacity": 2 } }"#).unwrap();
    assert_eq!(config.cache.capacity, 2);
    assert_eq!(config.cache.eviction_policy, EvictionPolicy::Lfu);
    assert_eq!(config.cpu.num_registers, 9);
}

#[test]
fn test_policy_alias_spellings() {
    let config: Config = serde_json::from_str(
        r#"{ "cache": { "eviction_policy": "Lru", "write_policy": "WriteBack" } }"#,
    )
    .unwrap();
    assert_eq!(config.cache.eviction_policy, EvictionPolicy::Lru);
    assert_eq!(config.cache.write_policy, WritePolicy::WriteBack);
}

#[test]
fn test_validate_rejects_zero_registers() {
    let mut config = Config::default();
    config.cpu.num_registers = 0;
    assert_eq!(config.validate(), Err(BuildError::InvalidRegisterCount(0)));
}

#[test]
fn test_validate_rejects_zero_capacity() {
    let mut config = Config::default();
    config.cache.capacity = 0;
    assert_eq!(config.validate(), Err(BuildError::InvalidCacheCapacity(0)));
}

#[test]
fn test_validate_rejects_zero_memory() {
    let mut config = Config::default();
    config.memory.size = 0;
    assert_eq!(config.validate(), Err(BuildError::InvalidMemorySize(0)));
}

/// A width override narrower than the cell count would leave initialized
/// cells unreachable; construction rejects it instead.
#[test]
fn test_validate_rejects_narrow_width_override() {
    let mut config = Config::default();
    config.memory.size = 128;
    config.memory.bit_width = Some(4);
    assert_eq!(
        config.validate(),
        Err(BuildError::NarrowAddressWidth {
            bit_width: 4,
            size: 128
        })
    );
}

/// A width override that exactly covers the cell count is accepted.
#[test]
fn test_validate_accepts_exact_width_override() {
    let mut config = Config::default();
    config.memory.size = 128;
    config.memory.bit_width = Some(7);
    assert!(config.validate().is_ok());
}
