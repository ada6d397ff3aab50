//! Loader tests.
//!
//! Exercises file loading (via temp files), data-line parsing, and the
//! skip-and-report seeding policy.

use std::fs;

use mipsim_core::common::LoadError;
use mipsim_core::config::MemoryConfig;
use mipsim_core::sim::loader::{load_data, load_program, parse_data_line, seed_memory};
use mipsim_core::soc::MemoryBus;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// 1. Data-line parsing
// ══════════════════════════════════════════════════════════

/// Well-formed `address,value` lines parse; the value tolerates whitespace.
#[rstest]
#[case("00000100,7", "00000100", 7)]
#[case("00000100, 7", "00000100", 7)]
#[case("11111111,-3", "11111111", -3)]
fn parses_data_lines(#[case] line: &str, #[case] addr: &str, #[case] value: i64) {
    assert_eq!(parse_data_line(line).unwrap(), (addr.to_string(), value));
}

/// The address field passes through untouched; the bus judges its shape.
#[test]
fn address_field_is_not_normalized() {
    let (addr, value) = parse_data_line("not-binary,5").unwrap();
    assert_eq!(addr, "not-binary");
    assert_eq!(value, 5);
}

#[rstest]
#[case("00000100")]
#[case("a,1,2")]
#[case("00000100,xyz")]
#[case("00000100,")]
fn malformed_data_lines_are_errors(#[case] line: &str) {
    assert!(matches!(parse_data_line(line), Err(LoadError::Format(_))));
}

// ══════════════════════════════════════════════════════════
// 2. Seeding
// ══════════════════════════════════════════════════════════

/// Malformed lines and rejected addresses are skipped without aborting;
/// well-formed lines still land.
#[test]
fn seeding_skips_bad_lines_and_continues() {
    let mut bus = MemoryBus::new(&MemoryConfig {
        size: 128,
        bit_width: None,
    });
    let lines: Vec<String> = [
        "00000100,7",
        "garbage",
        "0000,9",
        "00000101,xyz",
        "00000110,3",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    let applied = seed_memory(&mut bus, &lines);
    assert_eq!(applied, 2);
    assert_eq!(bus.read("00000100"), Ok(7));
    assert_eq!(bus.read("00000110"), Ok(3));
    assert_eq!(bus.read("00000101"), Ok(0));
}

// ══════════════════════════════════════════════════════════
// 3. File loading
// ══════════════════════════════════════════════════════════

/// Program files load as trimmed, non-empty lines in order.
#[test]
fn load_program_trims_and_filters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("program.txt");
    fs::write(&path, "  ADDI,R1,R0,1\n\n   \nHALT  \n").unwrap();

    let lines = load_program(path.to_str().unwrap()).unwrap();
    assert_eq!(lines, vec!["ADDI,R1,R0,1".to_string(), "HALT".to_string()]);
}

/// Data files load the same way.
#[test]
fn load_data_trims_and_filters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.txt");
    fs::write(&path, "00000100,7\n\n00000101,8\n").unwrap();

    let lines = load_data(path.to_str().unwrap()).unwrap();
    assert_eq!(lines.len(), 2);
}

/// A missing file is an I/O loader error.
#[test]
fn missing_file_is_io_error() {
    let err = load_program("/nonexistent/program.txt").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
