//! Program and data file loading.
//!
//! This module provides the glue between text files on disk and the machine:
//! 1. **Program loading:** Instruction files into ordered, trimmed, non-empty lines.
//! 2. **Data loading:** `address,value` files for pre-populating the memory bus.
//! 3. **Seeding:** Applying data lines to a bus, reporting and skipping malformed ones.

use std::fs;

use tracing::warn;

use crate::common::error::LoadError;
use crate::soc::MemoryBus;

/// Loads an instruction file: trimmed, non-empty lines in file order.
///
/// # Errors
///
/// [`LoadError::Io`] when the file cannot be read.
pub fn load_program(path: &str) -> Result<Vec<String>, LoadError> {
    read_lines(path)
}

/// Loads a data file: trimmed, non-empty `address,value` lines in file order.
///
/// Lines are not parsed here; [`seed_memory`] applies and reports them.
///
/// # Errors
///
/// [`LoadError::Io`] when the file cannot be read.
pub fn load_data(path: &str) -> Result<Vec<String>, LoadError> {
    read_lines(path)
}

/// Parses one data line of the form `address,value`.
///
/// The address field is passed through untouched (the bus validates its
/// shape); the value must parse as a signed integer.
///
/// # Errors
///
/// [`LoadError::Format`] when the line does not have exactly two fields or
/// the value is not an integer.
pub fn parse_data_line(line: &str) -> Result<(String, i64), LoadError> {
    let mut parts = line.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(addr), Some(value), None) => {
            let value = value
                .trim()
                .parse()
                .map_err(|_| LoadError::Format(line.to_string()))?;
            Ok((addr.to_string(), value))
        }
        _ => Err(LoadError::Format(line.to_string())),
    }
}

/// Applies data lines to the bus, pre-populating it before a run.
///
/// Malformed lines and addresses the bus rejects are reported and skipped
/// without aborting initialization. Returns the number of cells written.
pub fn seed_memory(bus: &mut MemoryBus, lines: &[String]) -> usize {
    let mut applied = 0;
    for line in lines {
        match parse_data_line(line) {
            Ok((addr, value)) => match bus.write(&addr, value) {
                Ok(()) => applied += 1,
                Err(err) => warn!(line = %line, %err, "skipping data line"),
            },
            Err(err) => warn!(line, %err, "skipping data line"),
        }
    }
    applied
}

fn read_lines(path: &str) -> Result<Vec<String>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
