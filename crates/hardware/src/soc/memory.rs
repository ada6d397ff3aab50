//! Flat memory bus.
//!
//! A fixed-size store keyed by binary-string addresses of exactly
//! `bit_width` characters. All cells are pre-allocated and zeroed at
//! construction, so a "miss" is structurally impossible for in-range
//! addresses; only out-of-shape or out-of-range addresses fail. There is no
//! eviction.

use std::collections::HashMap;

use tracing::trace;

use crate::common::error::MemoryError;
use crate::config::MemoryConfig;

/// Minimum address width in bits.
///
/// Small bus sizes still render addresses at this width, so address text
/// stays a fixed, readable shape.
pub const MIN_ADDRESS_BITS: usize = 8;

/// Returns the address width derived from a cell count: the number of bits
/// needed to index every cell, floored at [`MIN_ADDRESS_BITS`].
pub fn derived_width(size: usize) -> usize {
    if size <= 1 {
        MIN_ADDRESS_BITS
    } else {
        let needed = (usize::BITS - (size - 1).leading_zeros()) as usize;
        MIN_ADDRESS_BITS.max(needed)
    }
}

/// Flat memory bus.
///
/// One authoritative `bit_width` drives both cell initialization and live
/// address validation: either the derived width or a construction-validated
/// override, never a mix.
#[derive(Clone, Debug)]
pub struct MemoryBus {
    cells: HashMap<String, i64>,
    bit_width: usize,
    size: usize,
}

impl MemoryBus {
    /// Creates a bus with `config.size` cells, all zero.
    ///
    /// The size and any width override are validated by `Config::validate`
    /// before any machine is built.
    pub fn new(config: &MemoryConfig) -> Self {
        let bit_width = config.bit_width.unwrap_or_else(|| derived_width(config.size));
        let mut bus = Self {
            cells: HashMap::with_capacity(config.size),
            bit_width,
            size: config.size,
        };
        bus.init_cells();
        bus
    }

    /// Reads the cell at `addr`.
    ///
    /// # Errors
    ///
    /// [`MemoryError::MalformedAddress`] when `addr` is not a binary string
    /// of exactly `bit_width` characters; [`MemoryError::UnmappedAddress`]
    /// when it is well-formed but beyond the configured range and never
    /// written. In-range cells always resolve (0 if never written).
    pub fn read(&self, addr: &str) -> Result<i64, MemoryError> {
        self.validate(addr)?;
        match self.cells.get(addr) {
            Some(&value) => {
                trace!(addr, value, "bus read");
                Ok(value)
            }
            None => Err(MemoryError::UnmappedAddress(addr.to_string())),
        }
    }

    /// Writes `value` to the cell at `addr`.
    ///
    /// A well-formed address always succeeds, including addresses beyond the
    /// configured range; `clear` drops such strays.
    ///
    /// # Errors
    ///
    /// [`MemoryError::MalformedAddress`] when `addr` is out of shape.
    pub fn write(&mut self, addr: &str, value: i64) -> Result<(), MemoryError> {
        self.validate(addr)?;
        trace!(addr, value, "bus write");
        let _ = self.cells.insert(addr.to_string(), value);
        Ok(())
    }

    /// Resets every cell in the configured range to 0.
    ///
    /// Cells written beyond the configured range are dropped.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.init_cells();
    }

    /// Returns the authoritative address width in bits.
    pub fn bit_width(&self) -> usize {
        self.bit_width
    }

    /// Returns the configured cell count.
    pub fn size(&self) -> usize {
        self.size
    }

    fn validate(&self, addr: &str) -> Result<(), MemoryError> {
        if addr.len() != self.bit_width || !addr.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(MemoryError::MalformedAddress {
                addr: addr.to_string(),
                width: self.bit_width,
            });
        }
        Ok(())
    }

    fn init_cells(&mut self) {
        let width = self.bit_width;
        for index in 0..self.size {
            let _ = self.cells.insert(format!("{index:0width$b}"), 0);
        }
    }
}
