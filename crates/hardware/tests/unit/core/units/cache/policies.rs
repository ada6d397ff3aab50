//! Cache Eviction Policy Tests.
//!
//! Verifies the victim selection logic for the LFU and LRU policies. Each
//! policy implements `EvictionPolicy` with `update(slot)`, `victim()`,
//! `invalidate(slot)`, and `clear()`. Tests exercise them in isolation.

use mipsim_core::core::units::cache::policies::{EvictionPolicy, LfuPolicy, LruPolicy};

// ══════════════════════════════════════════════════════════
// 1. LFU Policy
// ══════════════════════════════════════════════════════════

/// With no accesses recorded, every slot ties at zero and the lowest index
/// wins.
#[test]
fn lfu_initial_victim_is_slot_zero() {
    let mut policy = LfuPolicy::new(4);
    assert_eq!(policy.victim(), 0);
}

/// The victim is the slot with the minimum access count.
#[test]
fn lfu_evicts_minimum_count() {
    let mut policy = LfuPolicy::new(3);
    policy.update(0);
    policy.update(0);
    policy.update(1);
    // Counts: [2, 1, 0]. Minimum is slot 2.
    assert_eq!(policy.victim(), 2);

    policy.update(2);
    policy.update(2);
    // Counts: [2, 1, 2]. Minimum is slot 1.
    assert_eq!(policy.victim(), 1);
}

/// Ties break to the lowest slot index: the scan is in table order and the
/// first minimum wins.
#[test]
fn lfu_tie_breaks_to_lowest_index() {
    let mut policy = LfuPolicy::new(4);
    policy.update(0);
    policy.update(1);
    policy.update(2);
    policy.update(3);
    // Counts: [1, 1, 1, 1]. All tie; slot 0 wins.
    assert_eq!(policy.victim(), 0);

    policy.update(0);
    // Counts: [2, 1, 1, 1]. Slots 1..=3 tie; slot 1 wins.
    assert_eq!(policy.victim(), 1);
}

/// Invalidation resets a slot's count, making it the preferred victim again.
#[test]
fn lfu_invalidate_resets_count() {
    let mut policy = LfuPolicy::new(2);
    policy.update(0);
    policy.update(0);
    policy.update(1);
    // Counts: [2, 1]. Victim is slot 1.
    assert_eq!(policy.victim(), 1);

    policy.invalidate(0);
    // Counts: [0, 1]. Victim is slot 0.
    assert_eq!(policy.victim(), 0);
}

/// Clear returns every count to zero.
#[test]
fn lfu_clear_resets_all_counts() {
    let mut policy = LfuPolicy::new(3);
    policy.update(1);
    policy.update(2);
    policy.update(2);
    policy.clear();
    assert_eq!(policy.victim(), 0);
}

// ══════════════════════════════════════════════════════════
// 2. LRU Policy
// ══════════════════════════════════════════════════════════

/// Initial stack is [0, 1, ..., n-1] with index 0 as MRU, so the victim is
/// the last slot.
#[test]
fn lru_initial_victim_is_last_slot() {
    let mut policy = LruPolicy::new(4);
    assert_eq!(policy.victim(), 3);
}

/// Accessing slots in order 0,1,2,3 makes 0 the LRU.
#[test]
fn lru_sequential_access_reorders() {
    let mut policy = LruPolicy::new(4);
    policy.update(0);
    policy.update(1);
    policy.update(2);
    policy.update(3);
    // Stack: [3, 2, 1, 0]. LRU = 0.
    assert_eq!(policy.victim(), 0);
}

/// Classic LRU scenario: access 0,1,2,3 then re-access 0 → LRU becomes 1.
#[test]
fn lru_evicts_true_lru_after_reaccess() {
    let mut policy = LruPolicy::new(4);
    policy.update(0);
    policy.update(1);
    policy.update(2);
    policy.update(3);
    assert_eq!(policy.victim(), 0);

    // Re-access 0 → promotes to MRU.
    policy.update(0);
    // Stack: [0, 3, 2, 1]. LRU = 1.
    assert_eq!(policy.victim(), 1);

    // Re-access 1 → promotes to MRU.
    policy.update(1);
    // Stack: [1, 0, 3, 2]. LRU = 2.
    assert_eq!(policy.victim(), 2);
}

/// Repeated accesses to the MRU slot do not change the victim.
#[test]
fn lru_repeated_access_same_slot() {
    let mut policy = LruPolicy::new(4);
    policy.update(0);
    policy.update(1);
    policy.update(2);
    policy.update(3);
    policy.update(3);
    policy.update(3);
    assert_eq!(policy.victim(), 0);
}

/// Invalidation demotes a slot to the LRU position.
#[test]
fn lru_invalidate_demotes_slot() {
    let mut policy = LruPolicy::new(3);
    policy.update(0);
    policy.update(1);
    policy.update(2);
    // Stack: [2, 1, 0]. LRU = 0.
    assert_eq!(policy.victim(), 0);

    policy.invalidate(2);
    // Stack: [1, 0, 2]. LRU = 2.
    assert_eq!(policy.victim(), 2);
}

/// Clear restores the initial stack.
#[test]
fn lru_clear_restores_initial_order() {
    let mut policy = LruPolicy::new(3);
    policy.update(2);
    policy.update(0);
    policy.clear();
    assert_eq!(policy.victim(), 2);
}

/// 2-slot LRU: simplest case.
#[test]
fn lru_two_slots() {
    let mut policy = LruPolicy::new(2);
    assert_eq!(policy.victim(), 1);

    policy.update(1);
    // Stack: [1, 0]. LRU = 0.
    assert_eq!(policy.victim(), 0);

    policy.update(0);
    // Stack: [0, 1]. LRU = 1.
    assert_eq!(policy.victim(), 1);
}
