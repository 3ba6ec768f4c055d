//! `run` command implementation.

use std::io::BufRead;

use anyhow::{Context, Result};

use config_loader::ConfigLoader;
use contracts::{Level, LogBlueprint, StatsSource};
use dispatcher::Logger;

use crate::cli::{Cli, RunArgs};
use crate::stats::{format_bytes, ProcStats};

/// Execute the `run` command
pub fn run_logging(args: &RunArgs, cli: &Cli) -> Result<()> {
    anyhow::ensure!(
        args.config.exists(),
        "configuration file not found: {}",
        args.config.display()
    );

    let mut blueprint = ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    apply_overrides(&mut blueprint, cli);

    let logger = dispatcher::create_logger(&blueprint).context("failed to build logger")?;

    report_memory(&logger);

    if args.demo {
        emit_demo_burst(&logger)?;
    } else {
        let level: Level = args.level.parse()?;
        forward_stdin(&logger, level)?;
    }

    print_sink_summary(&logger)?;
    Ok(())
}

/// Apply global CLI flags on top of the blueprint
fn apply_overrides(blueprint: &mut LogBlueprint, cli: &Cli) {
    if cli.quiet {
        blueprint.console.quiet = true;
    } else {
        match cli.verbose {
            0 => {}
            1 => blueprint.console.min_level = Level::Debug,
            _ => blueprint.console.min_level = Level::Trace,
        }
    }
    if let Some(color) = cli.color {
        blueprint.console.color = color.into();
    }
}

/// Log a memory snapshot through the collaborator interface
fn report_memory(logger: &Logger) {
    let snapshot = ProcStats.memory();
    let _ = dispatcher::debug!(
        logger,
        "memory: used={} peak={} free={} total={}",
        format_bytes(snapshot.used),
        format_bytes(snapshot.peak),
        format_bytes(snapshot.free),
        format_bytes(snapshot.total)
    );
}

/// One message per level, the classic visualization walk
fn emit_demo_burst(logger: &Logger) -> Result<()> {
    dispatcher::trace!(logger, "this is a trace: {}", 1)?;
    dispatcher::debug!(logger, "this is a debug: {}", 2)?;
    dispatcher::info!(logger, "this is info: {}", 3)?;
    dispatcher::warn!(logger, "this is a warn: {}", 4)?;
    dispatcher::error!(logger, "this is an error: {}", 5)?;
    dispatcher::fatal!(logger, "this is a fatal error: {}", 6)?;
    Ok(())
}

/// Forward each stdin line as one event at `level`
fn forward_stdin(logger: &Logger, level: Level) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        dispatcher::log_event!(logger, level, "{}", line)?;
    }
    Ok(())
}

/// Print per-sink delivery counters
fn print_sink_summary(logger: &Logger) -> Result<()> {
    let metrics = logger.metrics()?;
    if metrics.is_empty() {
        return Ok(());
    }

    println!("\nSink delivery");
    let last = metrics.len() - 1;
    for (i, (name, snap)) in metrics.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        println!(
            "   {branch} {name}: written={} failed={} filtered={}",
            snap.write_count, snap.failure_count, snap.filtered_count
        );
    }
    Ok(())
}
