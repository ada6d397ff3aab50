//! MIPS-subset CPU simulator CLI.
//!
//! This binary is the machine's orchestration surface. It performs:
//! 1. **Setup:** Argument parsing, optional JSON configuration, trace-channel subscriber.
//! 2. **Loading:** Instruction file and optional `address,value` data file.
//! 3. **Run:** Seeds the memory bus, runs the program, prints run statistics.

use std::fs;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    version,
    about = "MIPS-subset CPU simulator",
    long_about = "Run a comma-separated instruction file on a simulated CPU with a \
configurable cache and memory bus.\n\nExamples:\n  \
mipsim program.txt\n  \
mipsim program.txt --data data.txt --trace\n  \
mipsim program.txt --config sim.json"
)]
struct Cli {
    /// Instruction file: one `OPCODE,operand,...` per line.
    program: String,

    /// Data file: `address,value` lines applied to the memory bus before the run.
    #[arg(short, long)]
    data: Option<String>,

    /// JSON configuration file (built-in defaults when omitted).
    #[arg(short, long)]
    config: Option<String>,

    /// Enable the per-instruction trace channel.
    #[arg(short, long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = cli.config.as_deref().map_or_else(Config::default, load_config);
    init_tracing(cli.trace || config.general.trace);

    let mut cpu = match Cpu::new(&config) {
        Ok(cpu) => cpu,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    println!("---------------------------------------------------");
    println!("MIPS-subset CPU simulator");
    println!("---------------------------------------------------");
    println!(
        "  Registers: {}  Cache: {} entries ({:?}, {:?})  Memory: {} cells, {}-bit addresses",
        config.cpu.num_registers,
        cpu.cache.capacity(),
        config.cache.eviction_policy,
        config.cache.write_policy,
        cpu.bus.size(),
        cpu.bus.bit_width(),
    );

    if let Some(data_path) = cli.data.as_deref() {
        println!("Initializing memory bus from {data_path}...");
        let lines = loader::load_data(data_path).unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            process::exit(1);
        });
        let applied = loader::seed_memory(&mut cpu.bus, &lines);
        println!("Memory bus initialized ({applied} of {} lines applied)", lines.len());
    }

    let program = loader::load_program(&cli.program).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(1);
    });
    println!("---------------------------------------------------");
    println!("Sending {} instruction lines to the CPU...", program.len());
    cpu.run(&program);
    println!("---------------------------------------------------");
    println!("CPU processing complete");
    cpu.stats.print();
}

/// Reads and parses a JSON configuration file, exiting on failure.
fn load_config(path: &str) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Error reading config {path}: {err}");
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|err| {
        eprintln!("Error parsing config {path}: {err}");
        process::exit(1);
    })
}

/// Installs the trace-channel subscriber.
///
/// `RUST_LOG` overrides the level; otherwise `--trace` (or the config flag)
/// selects the full trace channel, and warnings/errors only by default.
fn init_tracing(trace: bool) {
    let default_level = if trace { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
