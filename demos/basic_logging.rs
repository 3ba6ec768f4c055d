//! Basic Logging Example
//!
//! Demonstrates the fan-out dispatcher: one message per level, two file
//! sinks at different thresholds, the quiet toggle, and status handling.
//!
//! Run with: cargo run --bin basic_logging

use std::fs::OpenOptions;

use contracts::Level;
use dispatcher::{Logger, LoggerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ==== Stage 1: Build the logger ====
    let logger = Logger::new(LoggerConfig::default());

    // ==== Stage 2: One message per level ====
    dispatcher::trace!(logger, "this is a trace: {}", 1)?;
    dispatcher::debug!(logger, "this is a debug: {}", 2)?;
    dispatcher::info!(logger, "this is info: {}", 3)?;
    dispatcher::warn!(logger, "this is a warn: {}", 4)?;
    dispatcher::error!(logger, "this is an error: {}", 5)?;
    dispatcher::fatal!(logger, "this is a fatal error: {}", 6)?;

    dispatcher::trace!(logger, "only a trace message")?;
    dispatcher::debug!(logger, "only a debug message")?;
    dispatcher::info!(logger, "only an info message")?;
    dispatcher::warn!(logger, "only a warning message")?;
    dispatcher::error!(logger, "only an error message")?;
    dispatcher::fatal!(logger, "only a fatal message")?;

    // A runtime-chosen template does not compile; templates must be literals:
    // let fmt = String::from("a format string: {}");
    // dispatcher::trace!(logger, fmt, 10);

    // ==== Stage 3: Handling the dispatch status ====
    if let Err(e) = dispatcher::warn!(logger, "this status is checked") {
        eprintln!("dispatch failed: {e}");
    }

    // ==== Stage 4: Fan out to files ====
    let everything = OpenOptions::new()
        .create(true)
        .append(true)
        .open("logfile0.log")?;
    let warnings_up = OpenOptions::new()
        .create(true)
        .append(true)
        .open("logfile1.log")?;
    logger.attach_writer("everything", everything, Level::Trace)?;
    logger.attach_writer("warnings_up", warnings_up, Level::Warn)?;

    dispatcher::info!(logger, "reaches the console and logfile0")?;
    dispatcher::error!(logger, "reaches the console and both files")?;

    // ==== Stage 5: Quiet mode ====
    logger.set_quiet(true);
    dispatcher::info!(logger, "file sinks still receive this")?;

    // ==== Stage 6: Delivery summary ====
    for (name, snapshot) in logger.metrics()? {
        println!(
            "{name}: written={} failed={} filtered={}",
            snapshot.write_count, snapshot.failure_count, snapshot.filtered_count
        );
    }

    Ok(())
}
