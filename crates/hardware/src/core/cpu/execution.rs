//! Instruction execution.
//!
//! This module implements the engine's dispatch cycle:
//! 1. **Decode:** One text line into an instruction (recoverable failures skip).
//! 2. **Dispatch:** Exhaustive match over the instruction set.
//! 3. **Control flow:** Counter arithmetic for branches and jumps.
//! 4. **Run loop:** Fetch lines by counter until exhaustion or HALT.

use tracing::{error, trace, warn};

use crate::common::error::{DecodeError, ExecError};
use crate::isa::abi;
use crate::isa::decode;
use crate::isa::instruction::{CacheOp, Instruction};

use super::Cpu;

/// Base program-counter advance applied to every fetched line.
///
/// The counter moves in two half-steps per line, one for the fetch and one
/// for the issue, so sequential instructions occupy every other slot of the
/// program. Control-flow instructions add to or replace the counter on top
/// of this base advance: after a taken `BNE,_,_,off` from counter `p`, the
/// counter reads `p + PC_STEP + 4 + 4*off`.
pub const PC_STEP: usize = 2;

/// Outcome of dispatching one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The instruction executed; continue with the next fetch.
    Continue,
    /// A HALT was dispatched; the run loop stops before any further line.
    Halt,
    /// The line was skipped (recoverable decode error, or an aborted
    /// memory-faulting instruction); the run continues.
    Skipped,
}

impl Cpu {
    /// Decodes and dispatches one line, advancing the program counter.
    ///
    /// The counter advances by [`PC_STEP`] for every fetched line — success,
    /// skip, or fault — before the handler's own control-flow effect.
    /// Recoverable decode errors and fatal memory faults both funnel into
    /// [`Signal::Skipped`]; the typed fault is observable through
    /// [`Cpu::execute`] directly.
    pub fn step(&mut self, line: &str) -> Signal {
        self.pc += PC_STEP;
        let inst = match decode::decode(line, self.regs.len()) {
            Ok(inst) => inst,
            Err(err) => {
                warn!(line, %err, "skipping undecodable line");
                return Signal::Skipped;
            }
        };
        trace!(line, opcode = inst.mnemonic(), "dispatch");
        match self.execute(&inst) {
            Ok(Signal::Continue) => {
                self.stats.instructions_executed += 1;
                Signal::Continue
            }
            Ok(signal) => signal,
            Err(ExecError::Decode(err)) => {
                warn!(line, %err, "skipping instruction");
                Signal::Skipped
            }
            Err(ExecError::Memory(err)) => {
                error!(line, %err, "memory fault, instruction aborted");
                Signal::Skipped
            }
        }
    }

    /// Executes one decoded instruction.
    ///
    /// Register arithmetic wraps on overflow. Counter arithmetic that would
    /// go negative saturates at 0, keeping the counter non-negative.
    ///
    /// # Errors
    ///
    /// [`ExecError::Decode`] for [`Instruction::Unknown`] (recoverable);
    /// [`ExecError::Memory`] when a load or store address cannot be resolved
    /// (fatal for the instruction — its effect is aborted).
    pub fn execute(&mut self, inst: &Instruction) -> Result<Signal, ExecError> {
        match *inst {
            Instruction::Add { dest, src, tgt } => {
                let value = self.regs.read(src).wrapping_add(self.regs.read(tgt));
                trace!(dest, value, "add");
                self.regs.write(dest, value);
            }
            Instruction::Addi { dest, src, imm } => {
                let value = self.regs.read(src).wrapping_add(imm);
                trace!(dest, value, "addi");
                self.regs.write(dest, value);
            }
            Instruction::Sub { dest, src, tgt } => {
                let value = self.regs.read(src).wrapping_sub(self.regs.read(tgt));
                trace!(dest, value, "sub");
                self.regs.write(dest, value);
            }
            Instruction::Slt { dest, src, tgt } => {
                let value = i64::from(self.regs.read(src) < self.regs.read(tgt));
                trace!(dest, value, "slt");
                self.regs.write(dest, value);
            }
            Instruction::Bne { src, tgt, offset } => {
                if self.regs.read(src) != self.regs.read(tgt) {
                    let jump = 4_i64.wrapping_add(offset.wrapping_mul(4));
                    self.pc = self.pc.saturating_add_signed(jump as isize);
                    trace!(pc = self.pc, "branch taken");
                }
            }
            Instruction::J { target } => {
                self.pc = jump_target(target);
                trace!(pc = self.pc, "jump");
            }
            Instruction::Jal { target } => {
                // The link register is implicit, so decode cannot bound it.
                if abi::REG_LINK >= self.regs.len() {
                    return Err(DecodeError::RegisterIndex {
                        index: abi::REG_LINK,
                        count: self.regs.len(),
                    }
                    .into());
                }
                self.regs.write(abi::REG_LINK, self.pc as i64 + 4);
                self.pc = jump_target(target);
                trace!(pc = self.pc, link = self.regs.read(abi::REG_LINK), "jump and link");
            }
            Instruction::Lw { base, dest, offset } => self.load_word(base, dest, offset)?,
            Instruction::Sw { base, src, offset } => self.store_word(base, src, offset)?,
            Instruction::Cache { op } => match op {
                CacheOp::Disable => {
                    trace!("caching disabled");
                    self.cache_enabled = false;
                }
                CacheOp::Enable => {
                    trace!("caching enabled");
                    self.cache_enabled = true;
                }
                CacheOp::Flush => self.cache.flush(),
            },
            Instruction::Halt => {
                trace!("halt");
                return Ok(Signal::Halt);
            }
            Instruction::Unknown(ref op) => {
                return Err(DecodeError::UnknownOpcode(op.clone()).into());
            }
        }
        Ok(Signal::Continue)
    }

    /// Runs a program: resets the counter, then fetches and dispatches
    /// `instructions[pc]` while the counter is within the program, stopping
    /// immediately on HALT.
    pub fn run(&mut self, instructions: &[String]) {
        self.pc = 0;
        while self.pc < instructions.len() {
            let line = &instructions[self.pc];
            if self.step(line) == Signal::Halt {
                break;
            }
        }
    }
}

/// Computes an absolute jump destination: `4 * target`, clamped at 0 for
/// negative targets.
fn jump_target(target: i64) -> usize {
    usize::try_from(target.wrapping_mul(4)).unwrap_or(0)
}
