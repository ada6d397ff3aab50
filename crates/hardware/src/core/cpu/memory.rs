//! Load/store path.
//!
//! Effective addresses are formed from a base register plus a signed offset
//! and rendered at the bus's address width. When caching is enabled, loads
//! consult the cache first and back-fill it on miss; stores always write
//! through to the bus, whatever the cache's write policy.

use tracing::debug;

use crate::common::addr::BusAddr;
use crate::common::error::MemoryError;

use super::Cpu;

impl Cpu {
    /// Loads `MEM[reg[base] + offset]` into `reg[dest]`.
    ///
    /// A cache hit or miss bumps the corresponding counter; a miss reads the
    /// bus and back-fills the cache with the fetched value. With caching
    /// disabled the bus is read directly.
    ///
    /// # Errors
    ///
    /// A [`MemoryError`] when neither layer can resolve the address; the
    /// destination register is left untouched.
    pub(crate) fn load_word(
        &mut self,
        base: usize,
        dest: usize,
        offset: i64,
    ) -> Result<(), MemoryError> {
        let addr = self.effective_address(base, offset);
        let value = if self.cache_enabled {
            if let Some(value) = self.cache.lookup(addr.as_str()) {
                self.stats.cache_hits += 1;
                value
            } else {
                self.stats.cache_misses += 1;
                let value = self.bus.read(addr.as_str())?;
                self.cache.store(addr.as_str(), value);
                debug!(addr = %addr, value, "cache miss back-filled");
                value
            }
        } else {
            self.bus.read(addr.as_str())?
        };
        self.regs.write(dest, value);
        Ok(())
    }

    /// Stores `reg[src]` to `MEM[reg[base] + offset]`.
    ///
    /// When caching is enabled the cache is updated first; the bus write
    /// always follows, so the bus never lags behind a visible store even
    /// under a write-back cache policy.
    ///
    /// # Errors
    ///
    /// A [`MemoryError`] when the formed address is malformed. The cache
    /// update precedes the bus fault in that case, matching the dispatch
    /// order above.
    pub(crate) fn store_word(
        &mut self,
        base: usize,
        src: usize,
        offset: i64,
    ) -> Result<(), MemoryError> {
        let addr = self.effective_address(base, offset);
        let value = self.regs.read(src);
        if self.cache_enabled {
            self.cache.store(addr.as_str(), value);
        }
        self.bus.write(addr.as_str(), value)
    }

    fn effective_address(&self, base: usize, offset: i64) -> BusAddr {
        BusAddr::encode(
            self.regs.read(base).wrapping_add(offset),
            self.bus.bit_width(),
        )
    }
}
