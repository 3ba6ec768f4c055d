//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;

use contracts::{Level, MemorySnapshot, StatsSource};

use crate::cli::InfoArgs;
use crate::stats::{format_bytes, ProcStats};

/// Build and host information for JSON output
#[derive(Serialize)]
struct InfoReport {
    version: &'static str,
    lock_backend: &'static str,
    levels: Vec<&'static str>,
    memory: MemorySnapshot,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    let report = InfoReport {
        version: env!("CARGO_PKG_VERSION"),
        lock_backend: dispatcher::lock::default_backend(),
        levels: Level::ALL.iter().map(|l| l.as_str()).collect(),
        memory: ProcStats.memory(),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize info")?;
        println!("{}", json);
        return Ok(());
    }

    println!("fanlog {}", report.version);
    println!("  Lock backend: {}", report.lock_backend);
    println!("  Levels: {}", report.levels.join(" < "));
    println!("  Memory (bytes):");
    println!("    used:  {}", format_bytes(report.memory.used));
    println!("    peak:  {}", format_bytes(report.memory.peak));
    println!("    free:  {}", format_bytes(report.memory.free));
    println!("    total: {}", format_bytes(report.memory.total));
    Ok(())
}
