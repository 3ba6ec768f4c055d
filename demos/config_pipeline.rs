//! Config-driven Logging Example
//!
//! Builds a logger from a TOML blueprint (a path given on the command line,
//! or an inline fallback), emits a burst of events, and prints the per-sink
//! delivery counters.
//!
//! Run with: cargo run --bin config_pipeline [-- path/to/log.toml]

use std::path::Path;

use config_loader::{ConfigFormat, ConfigLoader};

const FALLBACK_CONFIG: &str = r#"
[console]
min_level = "info"
color = "ansi"

[[sinks]]
name = "warnings_file"
sink_type = "file"
min_level = "warn"
[sinks.params]
path = "fanlog-demo.log"

[[sinks]]
name = "mirror"
sink_type = "stdout"
min_level = "error"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ==== Stage 1: Load the blueprint ====
    let blueprint = if let Some(path) = std::env::args().nth(1) {
        ConfigLoader::load_from_path(Path::new(&path))?
    } else {
        ConfigLoader::load_from_str(FALLBACK_CONFIG, ConfigFormat::Toml)?
    };
    println!(
        "blueprint: {} sinks, console >= {}",
        blueprint.sinks.len(),
        blueprint.console.min_level
    );

    // ==== Stage 2: Build the logger ====
    let logger = dispatcher::create_logger(&blueprint)?;

    // ==== Stage 3: Emit events ====
    for worker in 0..3 {
        dispatcher::info!(logger, "worker {} online", worker)?;
    }
    dispatcher::debug!(logger, "below the configured console threshold")?;
    dispatcher::warn!(logger, "queue depth at 80%")?;
    dispatcher::error!(logger, "upstream connection lost, retrying")?;

    // ==== Stage 4: Delivery summary ====
    println!();
    for (name, snapshot) in logger.metrics()? {
        println!(
            "{name}: written={} failed={} filtered={}",
            snapshot.write_count, snapshot.failure_count, snapshot.filtered_count
        );
    }

    Ok(())
}
