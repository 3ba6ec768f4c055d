//! LogBlueprint - Config Loader output
//!
//! Describes a complete logger configuration: console behavior, registry
//! bound, and the sink routing table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Level;

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Complete logger configuration blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogBlueprint {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Upper bound on registered sinks
    #[serde(default = "default_max_sinks")]
    pub max_sinks: usize,

    /// Console sink settings
    #[serde(default)]
    pub console: ConsoleConfig,

    /// Output routing configuration
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
}

impl Default for LogBlueprint {
    fn default() -> Self {
        Self {
            version: ConfigVersion::default(),
            max_sinks: default_max_sinks(),
            console: ConsoleConfig::default(),
            sinks: Vec::new(),
        }
    }
}

fn default_max_sinks() -> usize {
    63
}

/// Console sink settings: global threshold, quiet gate, color mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Global minimum level for console output
    #[serde(default = "default_min_level")]
    pub min_level: Level,

    /// Suppress console output entirely (registered sinks unaffected)
    #[serde(default)]
    pub quiet: bool,

    /// ANSI color mode
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
            quiet: false,
            color: ColorMode::default(),
        }
    }
}

fn default_min_level() -> Level {
    Level::Trace
}

/// Console color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Plain text
    #[default]
    Plain,
    /// ANSI color escapes per level; text content identical to plain
    Ansi,
}

/// Single sink registration entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Sink name (used for metrics and error reporting)
    pub name: String,

    /// Sink kind
    pub sink_type: SinkType,

    /// Minimum level this sink receives
    #[serde(default = "default_min_level")]
    pub min_level: Level,

    /// Kind-specific parameters (e.g. `path` for file sinks)
    #[serde(default)]
    pub params: HashMap<String, String>,
}

/// Sink kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkType {
    /// Append to the file at `params["path"]`
    File,
    /// Write to standard output
    Stdout,
    /// Write to standard error
    Stderr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_defaults() {
        let bp = LogBlueprint::default();
        assert_eq!(bp.max_sinks, 63);
        assert_eq!(bp.console.min_level, Level::Trace);
        assert!(!bp.console.quiet);
        assert_eq!(bp.console.color, ColorMode::Plain);
        assert!(bp.sinks.is_empty());
    }

    #[test]
    fn test_minimal_json_document() {
        let bp: LogBlueprint = serde_json::from_str("{}").unwrap();
        assert_eq!(bp.version, ConfigVersion::V1);
        assert_eq!(bp.max_sinks, 63);
    }

    #[test]
    fn test_sink_entry_defaults() {
        let json = r#"{
            "sinks": [{ "name": "audit", "sink_type": "stderr" }]
        }"#;
        let bp: LogBlueprint = serde_json::from_str(json).unwrap();
        assert_eq!(bp.sinks.len(), 1);
        assert_eq!(bp.sinks[0].sink_type, SinkType::Stderr);
        assert_eq!(bp.sinks[0].min_level, Level::Trace);
        assert!(bp.sinks[0].params.is_empty());
    }
}
