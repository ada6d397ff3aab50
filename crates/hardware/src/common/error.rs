//! Error definitions for every failure tier.
//!
//! This module defines the error handling model for the simulator:
//! 1. **Recoverable tier:** [`DecodeError`] — malformed instruction text. Logged
//!    and skipped; the program counter still advances and the run continues.
//! 2. **Fatal tier:** [`MemoryError`] — an address the memory hierarchy cannot
//!    resolve. Aborts the current instruction's effect.
//! 3. **Execute layer:** [`ExecError`] — the sum of the two tiers, returned by
//!    instruction execution.
//! 4. **Construction:** [`BuildError`] — invalid configuration, rejected before
//!    any instruction executes.
//! 5. **Loader:** [`LoadError`] — program/data file I/O and format failures.

use thiserror::Error;

/// Recoverable decode faults.
///
/// These model a lenient assembler: a garbage line is reported and skipped
/// without stopping the machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The line was empty after trimming.
    #[error("empty instruction line")]
    EmptyLine,

    /// The mnemonic does not name any instruction.
    #[error("unknown opcode `{0}`")]
    UnknownOpcode(String),

    /// The opcode was given the wrong number of operands.
    #[error("{opcode} expects {expected} operand(s), got {found}")]
    OperandCount {
        /// The decoded mnemonic.
        opcode: String,
        /// Operands the opcode requires.
        expected: usize,
        /// Operands found on the line.
        found: usize,
    },

    /// A register operand is not of the form `R<k>`.
    #[error("invalid register name `{0}`")]
    InvalidRegister(String),

    /// A register operand names an index beyond the register file.
    #[error("register index {index} out of range for a file of {count} registers")]
    RegisterIndex {
        /// The parsed register index.
        index: usize,
        /// The configured register count.
        count: usize,
    },

    /// An immediate, offset, or target operand is not an integer.
    #[error("invalid integer operand `{0}`")]
    InvalidImmediate(String),

    /// The `CACHE` operand is not one of the three defined modes.
    #[error("invalid cache mode {0} (expected 0 = disable, 1 = enable, 2 = flush)")]
    InvalidCacheMode(i64),
}

/// Fatal per-access memory faults.
///
/// Raised when an address cannot be resolved by either the cache or the
/// memory bus — not merely "not yet written", but out of shape or beyond the
/// configured range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The address is not a binary string of the bus's configured width.
    #[error("malformed address `{addr}`: expected a binary string of length {width}")]
    MalformedAddress {
        /// The offending address text.
        addr: String,
        /// The bus's configured address width.
        width: usize,
    },

    /// The address is well-formed but maps to no cell in the configured range.
    #[error("address `{0}` is outside the configured memory range")]
    UnmappedAddress(String),
}

/// Faults raised while executing a dispatched instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    /// Recoverable tier: skipped by the engine's step loop.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Fatal tier: the instruction's effect is aborted.
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

/// Construction-time configuration faults.
///
/// These fail fast: a CPU is never built from an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The register file must hold at least one register.
    #[error("num_registers must be at least 1, got {0}")]
    InvalidRegisterCount(usize),

    /// The cache must hold at least one entry.
    #[error("cache capacity must be at least 1, got {0}")]
    InvalidCacheCapacity(usize),

    /// The memory bus must hold at least one cell.
    #[error("memory size must be at least 1, got {0}")]
    InvalidMemorySize(usize),

    /// An explicit address-width override cannot reach every configured cell.
    #[error("bit width {bit_width} cannot address {size} memory cells")]
    NarrowAddressWidth {
        /// The overridden address width in bits.
        bit_width: usize,
        /// The configured cell count.
        size: usize,
    },
}

/// Program/data file loading faults.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A data line is not of the form `address,value`.
    #[error("malformed data line `{0}`: expected `address,value`")]
    Format(String),
}
