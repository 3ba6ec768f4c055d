//! # fanlog CLI
//!
//! Command-line entry point.
//!
//! Provides:
//! - Configuration loading and validation
//! - A demo/pipe runner for the fan-out logger
//! - Build and host information

mod cli;
mod commands;
mod stats;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{run_info, run_logging, run_validate};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Run(args) => run_logging(args, &cli),
        Commands::Validate(args) => run_validate(args),
        Commands::Info(args) => run_info(args),
    }
}
