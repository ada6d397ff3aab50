//! Run statistics collection and reporting.
//!
//! Tracks the counters the machine exposes after a run: instructions
//! executed, cache hits, and cache misses. Counters are owned by the CPU and
//! reset only by constructing a new CPU.

/// Run statistics.
///
/// All counters are monotonically non-decreasing for the lifetime of the
/// owning CPU.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Instructions dispatched successfully (HALT excluded).
    pub instructions_executed: u64,
    /// Loads resolved by the cache.
    pub cache_hits: u64,
    /// Loads that missed the cache and fell through to the bus.
    pub cache_misses: u64,
}

impl SimStats {
    /// Returns the cache hit rate as a percentage (0 when no accesses).
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            (self.cache_hits as f64 / total as f64) * 100.0
        }
    }

    /// Prints all statistics to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("CPU SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_insts                {}", self.instructions_executed);
        println!("cache.hits               {}", self.cache_hits);
        println!("cache.misses             {}", self.cache_misses);
        println!("cache.hit_rate           {:.2}%", self.hit_rate());
        println!("==========================================================");
    }
}
