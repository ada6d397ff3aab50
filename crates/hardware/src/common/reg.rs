//! Register file implementation.
//!
//! A fixed-length sequence of signed integers, index-addressed. All registers
//! are zero at construction; the CPU engine's handlers are the only writers.

/// Fixed-length register file.
///
/// Indices are validated by the instruction decoder before any handler runs,
/// so `read` and `write` take in-bounds indices by contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: Vec<i64>,
}

impl RegisterFile {
    /// Creates a register file of `count` registers, all zero.
    ///
    /// The count is validated by `Config::validate` before construction.
    pub fn new(count: usize) -> Self {
        Self {
            regs: vec![0; count],
        }
    }

    /// Reads the value of register `idx`.
    pub fn read(&self, idx: usize) -> i64 {
        self.regs[idx]
    }

    /// Writes `value` to register `idx`.
    pub fn write(&mut self, idx: usize, value: i64) {
        self.regs[idx] = value;
    }

    /// Returns the number of registers in the file.
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns `true` if the file holds no registers (never true for a
    /// validated configuration).
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Resets every register to zero.
    pub fn reset(&mut self) {
        self.regs.fill(0);
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Useful for debugging register state after a run.
    pub fn dump(&self) {
        for (idx, value) in self.regs.iter().enumerate() {
            println!("R{idx:<2} = {value}");
        }
    }
}
