//! Instruction set: text decoding and the instruction representation.
//!
//! This module covers the machine's eleven-opcode MIPS-like subset:
//! 1. **Representation:** A closed instruction enum the engine matches on exhaustively.
//! 2. **Decoding:** Comma-separated text lines into instructions, with the recoverable error tier.
//! 3. **Conventions:** Named register roles (the link register).

/// Register-file conventions.
pub mod abi;

/// Text decoder for instruction lines.
pub mod decode;

/// Instruction representation.
pub mod instruction;

pub use instruction::{CacheOp, Instruction};
