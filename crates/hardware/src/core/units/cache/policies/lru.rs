//! Least Recently Used (LRU) eviction policy.
//!
//! Maintains a usage stack over the cache slots. When a slot is accessed it
//! moves to the top (most-recently-used position); the bottom of the stack
//! is the least recently used slot and is the eviction victim.

use super::EvictionPolicy;

/// LRU policy state.
pub struct LruPolicy {
    /// Usage stack over slot indices. Index 0 is MRU, the last index is LRU.
    usage: Vec<usize>,
}

impl LruPolicy {
    /// Creates an LRU policy over `slots` cache slots.
    ///
    /// The initial stack is `[0, 1, ..., slots-1]`, so untouched slots are
    /// consumed from the highest index downward.
    pub fn new(slots: usize) -> Self {
        Self {
            usage: (0..slots).collect(),
        }
    }
}

impl EvictionPolicy for LruPolicy {
    /// Moves the accessed slot to the MRU position.
    fn update(&mut self, slot: usize) {
        if let Some(pos) = self.usage.iter().position(|&s| s == slot) {
            let _ = self.usage.remove(pos);
        }
        self.usage.insert(0, slot);
    }

    /// Returns the slot at the LRU position.
    fn victim(&mut self) -> usize {
        self.usage.last().copied().unwrap_or(0)
    }

    /// Demotes the slot to the LRU position.
    fn invalidate(&mut self, slot: usize) {
        if let Some(pos) = self.usage.iter().position(|&s| s == slot) {
            let _ = self.usage.remove(pos);
        }
        self.usage.push(slot);
    }

    fn clear(&mut self) {
        let slots = self.usage.len();
        self.usage.clear();
        self.usage.extend(0..slots);
    }
}
