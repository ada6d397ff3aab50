//! Associative cache table.
//!
//! A fixed-capacity, fully-associative store keyed by opaque string
//! addresses, with a pluggable eviction policy (LFU or LRU) and a write
//! policy (write-through or write-back via dirty markers). The cache sits in
//! front of the memory bus from the CPU's perspective but never talks to it
//! directly; the engine orchestrates fills on miss.

/// Cache eviction policy implementations (LFU, LRU).
pub mod policies;

use tracing::{debug, trace};

use self::policies::{EvictionPolicy, LfuPolicy, LruPolicy};
use crate::config::{CacheConfig, EvictionPolicy as PolicyKind, WritePolicy};

/// One cache slot: key, validity, value, and dirty marker.
///
/// An invalid slot is the empty-sentinel placeholder seeded by `flush`; it
/// reports absent on lookup until a key is stored into it.
#[derive(Clone, Default)]
struct CacheSlot {
    key: String,
    valid: bool,
    value: i64,
    dirty: bool,
}

/// Fixed-capacity associative cache with configurable eviction and write
/// policies.
///
/// The table is structurally full at all times: `capacity` slots exist from
/// construction, and invalid slots stand in for absent entries. A store to a
/// new key therefore always routes victim selection through the policy
/// object, which picks placeholder slots before live ones.
pub struct Cache {
    slots: Vec<CacheSlot>,
    policy: Box<dyn EvictionPolicy>,
    write_policy: WritePolicy,
}

impl Cache {
    /// Creates a cache from the given configuration.
    ///
    /// The capacity is validated (non-zero) by `Config::validate` before any
    /// machine is built.
    pub fn new(config: &CacheConfig) -> Self {
        let policy: Box<dyn EvictionPolicy> = match config.eviction_policy {
            PolicyKind::Lfu => Box::new(LfuPolicy::new(config.capacity)),
            PolicyKind::Lru => Box::new(LruPolicy::new(config.capacity)),
        };
        Self {
            slots: vec![CacheSlot::default(); config.capacity],
            policy,
            write_policy: config.write_policy,
        }
    }

    /// Looks up `addr`, recording the access on a hit.
    ///
    /// For LFU the hit increments the key's frequency counter; for LRU it
    /// marks the key most recently used. Placeholder slots are absent.
    pub fn lookup(&mut self, addr: &str) -> Option<i64> {
        let slot = self.find(addr)?;
        self.policy.update(slot);
        let value = self.slots[slot].value;
        trace!(addr, value, "cache hit");
        Some(value)
    }

    /// Stores `addr → value`, evicting exactly one entry first when the key
    /// is new.
    ///
    /// The stored key is recorded as accessed (LFU: post-insert increment;
    /// LRU: most recently used). Under write-back the entry is marked dirty;
    /// dirty entries are tracked but never drained to the bus — the store
    /// instruction always writes through on its own.
    pub fn store(&mut self, addr: &str, value: i64) {
        let slot = match self.find(addr) {
            Some(slot) => slot,
            None => {
                let victim = self.policy.victim();
                if self.slots[victim].valid {
                    debug!(evicted = %self.slots[victim].key, slot = victim, "cache eviction");
                }
                self.policy.invalidate(victim);
                self.slots[victim] = CacheSlot {
                    key: addr.to_string(),
                    valid: true,
                    value: 0,
                    dirty: false,
                };
                victim
            }
        };
        let entry = &mut self.slots[slot];
        entry.value = value;
        if self.write_policy == WritePolicy::WriteBack {
            entry.dirty = true;
        }
        self.policy.update(slot);
        trace!(addr, value, "cache store");
    }

    /// Clears all entries, re-seeding `capacity` placeholder slots.
    ///
    /// Every slot returns to the empty sentinel (absent on lookup, clean,
    /// frequency/recency history cleared). This is the only way the table
    /// returns to its baseline; the `CACHE,2` instruction routes here.
    pub fn flush(&mut self) {
        for slot in &mut self.slots {
            *slot = CacheSlot::default();
        }
        self.policy.clear();
        debug!("cache flushed");
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live (non-placeholder) entries.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.valid).count()
    }

    /// Returns `true` if no live entries exist.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `addr` is a live entry.
    pub fn contains(&self, addr: &str) -> bool {
        self.find(addr).is_some()
    }

    /// Returns `true` if `addr` is a live entry with its dirty marker set.
    pub fn is_dirty(&self, addr: &str) -> bool {
        self.find(addr).is_some_and(|slot| self.slots[slot].dirty)
    }

    fn find(&self, addr: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.valid && slot.key == addr)
    }
}
