//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// fanlog - leveled log fan-out toolkit
#[derive(Parser, Debug)]
#[command(
    name = "fanlog",
    author,
    version,
    about = "Leveled log fan-out toolkit",
    long_about = "Drives the fan-out logging dispatcher from the command line.\n\n\
                  Loads a logger blueprint, registers the configured sinks, and \n\
                  feeds events from a demonstration burst or standard input."
)]
pub struct Cli {
    /// Lower the console threshold (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "FANLOG_VERBOSE")]
    pub verbose: u8,

    /// Suppress console output (registered sinks still receive events)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Console color mode (overrides the blueprint when given)
    #[arg(long, value_enum, global = true, env = "FANLOG_COLOR")]
    pub color: Option<ColorArg>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the fan-out logger
    Run(RunArgs),

    /// Validate configuration file without running
    Validate(ValidateArgs),

    /// Display build and host information
    Info(InfoArgs),
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, default_value = "log.toml", env = "FANLOG_CONFIG")]
    pub config: PathBuf,

    /// Emit one demonstration message per level and exit
    #[arg(long)]
    pub demo: bool,

    /// Level used for lines read from standard input
    #[arg(long, default_value = "info", env = "FANLOG_LEVEL")]
    pub level: String,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "log.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Console color mode
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ColorArg {
    /// Plain text output
    Plain,
    /// ANSI colored output
    Ansi,
}

impl From<ColorArg> for contracts::ColorMode {
    fn from(value: ColorArg) -> Self {
        match value {
            ColorArg::Plain => contracts::ColorMode::Plain,
            ColorArg::Ansi => contracts::ColorMode::Ansi,
        }
    }
}
