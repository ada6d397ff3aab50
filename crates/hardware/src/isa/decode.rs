//! Text decoder for instruction lines.
//!
//! Lines are of the form `OPCODE,operand,operand,...`. The decoder trims the
//! line, splits on commas, resolves the mnemonic case-insensitively, and
//! parses each operand against the opcode's required shape. Every failure is
//! a recoverable [`DecodeError`]; the engine logs and skips the line.

use crate::common::error::DecodeError;

use super::instruction::{CacheOp, Instruction};

/// Decodes one instruction line.
///
/// `num_registers` bounds register operands: `R<k>` must satisfy
/// `k < num_registers`. An unrecognized mnemonic decodes successfully to
/// [`Instruction::Unknown`]; executing it yields the unknown-opcode error.
///
/// # Errors
///
/// Returns a [`DecodeError`] for an empty line, a wrong operand count, or a
/// malformed register/immediate/cache-mode operand.
pub fn decode(line: &str, num_registers: usize) -> Result<Instruction, DecodeError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(DecodeError::EmptyLine);
    }

    let mut parts = line.split(',');
    let opcode = parts.next().unwrap_or_default().trim().to_ascii_uppercase();
    let operands: Vec<&str> = parts.collect();

    let inst = match opcode.as_str() {
        "ADD" => {
            let [d, s, t] = take::<3>(&opcode, &operands)?;
            Instruction::Add {
                dest: register(d, num_registers)?,
                src: register(s, num_registers)?,
                tgt: register(t, num_registers)?,
            }
        }
        "ADDI" => {
            let [d, s, imm] = take::<3>(&opcode, &operands)?;
            Instruction::Addi {
                dest: register(d, num_registers)?,
                src: register(s, num_registers)?,
                imm: integer(imm)?,
            }
        }
        "SUB" => {
            let [d, s, t] = take::<3>(&opcode, &operands)?;
            Instruction::Sub {
                dest: register(d, num_registers)?,
                src: register(s, num_registers)?,
                tgt: register(t, num_registers)?,
            }
        }
        "SLT" => {
            let [d, s, t] = take::<3>(&opcode, &operands)?;
            Instruction::Slt {
                dest: register(d, num_registers)?,
                src: register(s, num_registers)?,
                tgt: register(t, num_registers)?,
            }
        }
        "BNE" => {
            let [s, t, offset] = take::<3>(&opcode, &operands)?;
            Instruction::Bne {
                src: register(s, num_registers)?,
                tgt: register(t, num_registers)?,
                offset: integer(offset)?,
            }
        }
        "J" => {
            let [target] = take::<1>(&opcode, &operands)?;
            Instruction::J {
                target: integer(target)?,
            }
        }
        "JAL" => {
            let [target] = take::<1>(&opcode, &operands)?;
            Instruction::Jal {
                target: integer(target)?,
            }
        }
        "LW" => {
            let [base, dest, offset] = take::<3>(&opcode, &operands)?;
            Instruction::Lw {
                base: register(base, num_registers)?,
                dest: register(dest, num_registers)?,
                offset: integer(offset)?,
            }
        }
        "SW" => {
            let [base, src, offset] = take::<3>(&opcode, &operands)?;
            Instruction::Sw {
                base: register(base, num_registers)?,
                src: register(src, num_registers)?,
                offset: integer(offset)?,
            }
        }
        "CACHE" => {
            let [mode] = take::<1>(&opcode, &operands)?;
            Instruction::Cache {
                op: cache_op(mode)?,
            }
        }
        "HALT" => {
            let [] = take::<0>(&opcode, &operands)?;
            Instruction::Halt
        }
        _ => Instruction::Unknown(opcode.clone()),
    };
    Ok(inst)
}

/// Checks the operand count for `opcode`, yielding the operands as an array.
fn take<'a, const N: usize>(
    opcode: &str,
    operands: &[&'a str],
) -> Result<[&'a str; N], DecodeError> {
    <[&'a str; N]>::try_from(operands).map_err(|_| DecodeError::OperandCount {
        opcode: opcode.to_string(),
        expected: N,
        found: operands.len(),
    })
}

/// Parses a register operand of the form `R<k>` with `k < count`.
///
/// The register prefix is a literal capital `R`; operands are not trimmed,
/// so ` R1` is malformed.
fn register(token: &str, count: usize) -> Result<usize, DecodeError> {
    let index = token
        .strip_prefix('R')
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<usize>().ok())
        .ok_or_else(|| DecodeError::InvalidRegister(token.to_string()))?;
    if index >= count {
        return Err(DecodeError::RegisterIndex { index, count });
    }
    Ok(index)
}

/// Parses a signed integer operand (immediate, offset, or jump target).
fn integer(token: &str) -> Result<i64, DecodeError> {
    token
        .trim()
        .parse()
        .map_err(|_| DecodeError::InvalidImmediate(token.to_string()))
}

/// Parses the `CACHE` mode operand into a [`CacheOp`].
fn cache_op(token: &str) -> Result<CacheOp, DecodeError> {
    match integer(token)? {
        0 => Ok(CacheOp::Disable),
        1 => Ok(CacheOp::Enable),
        2 => Ok(CacheOp::Flush),
        mode => Err(DecodeError::InvalidCacheMode(mode)),
    }
}
