//! Register file tests.

use mipsim_core::common::RegisterFile;
use pretty_assertions::assert_eq;

/// All registers start at zero.
#[test]
fn starts_zeroed() {
    let regs = RegisterFile::new(9);
    assert_eq!(regs.len(), 9);
    for idx in 0..9 {
        assert_eq!(regs.read(idx), 0);
    }
}

/// Writes land on the addressed register only.
#[test]
fn write_is_index_addressed() {
    let mut regs = RegisterFile::new(4);
    regs.write(2, -7);
    assert_eq!(regs.read(2), -7);
    assert_eq!(regs.read(0), 0);
    assert_eq!(regs.read(1), 0);
    assert_eq!(regs.read(3), 0);
}

/// Reset returns every register to zero.
#[test]
fn reset_zeroes_everything() {
    let mut regs = RegisterFile::new(4);
    regs.write(0, 1);
    regs.write(3, 99);
    regs.reset();
    for idx in 0..4 {
        assert_eq!(regs.read(idx), 0);
    }
}
