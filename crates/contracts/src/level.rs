//! Severity levels
//!
//! Total order: `Trace < Debug < Info < Warn < Error < Fatal`. A level is
//! both an event's severity tag and a filter threshold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ContractError;

/// Ordered severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Very fine-grained diagnostics
    Trace = 0,
    /// Diagnostics useful while debugging
    Debug = 1,
    /// Coarse-grained progress messages
    Info = 2,
    /// Potentially harmful situations
    Warn = 3,
    /// Errors that still allow the process to continue
    Error = 4,
    /// Errors after which the process is expected to stop
    Fatal = 5,
}

impl Level {
    /// All levels in ascending severity order
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Rendered name; sinks pad this to a fixed 7-character column
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARNING",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Whether an event at this level passes `threshold`
    pub const fn passes(self, threshold: Level) -> bool {
        self as u8 >= threshold as u8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() honors width/alignment so sinks can column-align names
        f.pad(self.as_str())
    }
}

impl TryFrom<u8> for Level {
    type Error = ContractError;

    fn try_from(value: u8) -> Result<Self, ContractError> {
        match value {
            0 => Ok(Level::Trace),
            1 => Ok(Level::Debug),
            2 => Ok(Level::Info),
            3 => Ok(Level::Warn),
            4 => Ok(Level::Error),
            5 => Ok(Level::Fatal),
            other => Err(ContractError::unknown_level(other.to_string())),
        }
    }
}

impl FromStr for Level {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(ContractError::unknown_level(s)),
        }
    }
}
