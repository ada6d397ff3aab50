//! Instruction representation.
//!
//! Decoding produces an [`Instruction`] and execution pattern-matches over it
//! exhaustively, so "unknown opcode" is a representable, testable state
//! rather than a lookup miss.

/// Cache-control operation selected by the `CACHE` instruction operand.
///
/// The three modes are mutually exclusive by construction; an operand
/// outside 0..=2 is a decode error, not a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOp {
    /// `CACHE,0`: route loads and stores directly to the memory bus.
    Disable,
    /// `CACHE,1`: route loads and stores through the cache.
    Enable,
    /// `CACHE,2`: flush the cache back to its empty baseline.
    Flush,
}

/// A decoded instruction.
///
/// Register operands are indices into the register file, validated against
/// the configured register count at decode time. Immediates, offsets, and
/// jump targets are signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `ADD d,s,t`: `reg[d] = reg[s] + reg[t]`.
    Add {
        /// Destination register.
        dest: usize,
        /// First source register.
        src: usize,
        /// Second source register.
        tgt: usize,
    },
    /// `ADDI d,s,imm`: `reg[d] = reg[s] + imm`.
    Addi {
        /// Destination register.
        dest: usize,
        /// Source register.
        src: usize,
        /// Immediate addend.
        imm: i64,
    },
    /// `SUB d,s,t`: `reg[d] = reg[s] - reg[t]`.
    Sub {
        /// Destination register.
        dest: usize,
        /// Minuend register.
        src: usize,
        /// Subtrahend register.
        tgt: usize,
    },
    /// `SLT d,s,t`: `reg[d] = 1` if `reg[s] < reg[t]`, else `0`.
    Slt {
        /// Destination register.
        dest: usize,
        /// Left comparand register.
        src: usize,
        /// Right comparand register.
        tgt: usize,
    },
    /// `BNE s,t,offset`: if `reg[s] != reg[t]`, advance the counter by
    /// `4 + 4*offset` on top of the base advance.
    Bne {
        /// Left comparand register.
        src: usize,
        /// Right comparand register.
        tgt: usize,
        /// Branch offset in instruction units.
        offset: i64,
    },
    /// `J target`: set the counter to `4 * target`.
    J {
        /// Absolute jump target in instruction units.
        target: i64,
    },
    /// `JAL target`: store the return counter in the link register, then
    /// set the counter to `4 * target`.
    Jal {
        /// Absolute jump target in instruction units.
        target: i64,
    },
    /// `LW s,t,offset`: `reg[t] = MEM[reg[s] + offset]`, through the cache
    /// when caching is enabled.
    Lw {
        /// Base-address register.
        base: usize,
        /// Destination register.
        dest: usize,
        /// Address offset.
        offset: i64,
    },
    /// `SW s,t,offset`: `MEM[reg[s] + offset] = reg[t]`.
    Sw {
        /// Base-address register.
        base: usize,
        /// Source register.
        src: usize,
        /// Address offset.
        offset: i64,
    },
    /// `CACHE mode`: cache control.
    Cache {
        /// The selected cache operation.
        op: CacheOp,
    },
    /// `HALT`: stop the run before any further line executes.
    Halt,
    /// A mnemonic that names no instruction; executing it is the
    /// recoverable unknown-opcode error.
    Unknown(String),
}

impl Instruction {
    /// Returns the instruction's mnemonic, for trace output.
    pub fn mnemonic(&self) -> &str {
        match self {
            Self::Add { .. } => "ADD",
            Self::Addi { .. } => "ADDI",
            Self::Sub { .. } => "SUB",
            Self::Slt { .. } => "SLT",
            Self::Bne { .. } => "BNE",
            Self::J { .. } => "J",
            Self::Jal { .. } => "JAL",
            Self::Lw { .. } => "LW",
            Self::Sw { .. } => "SW",
            Self::Cache { .. } => "CACHE",
            Self::Halt => "HALT",
            Self::Unknown(op) => op,
        }
    }
}
