//! ProcStats - Linux `/proc` implementation of the StatsSource collaborator
//!
//! Reads VmRSS/VmHWM from `/proc/self/status` and MemFree/MemTotal from
//! `/proc/meminfo`. The pseudo-files report kB; values are scaled to bytes.
//! On hosts without `/proc` every counter reads as `None`.

use std::fs;
use std::path::Path;

use contracts::StatsSource;

/// Memory statistics reader backed by the `/proc` pseudo-filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcStats;

impl ProcStats {
    fn read_kb(path: impl AsRef<Path>, key: &str) -> Option<u64> {
        let content = fs::read_to_string(path).ok()?;
        parse_kb_line(&content, key)
    }
}

/// Find `key:  <n> kB` in pseudo-file content and return `n` in bytes
fn parse_kb_line(content: &str, key: &str) -> Option<u64> {
    for line in content.lines() {
        let Some(rest) = line.strip_prefix(key) else {
            continue;
        };
        let Some(rest) = rest.strip_prefix(':') else {
            continue;
        };
        let value = rest.trim().trim_end_matches("kB").trim();
        return value.parse::<u64>().ok().map(|kb| kb * 1024);
    }
    None
}

/// Render a byte counter for human-readable output
pub fn format_bytes(value: Option<u64>) -> String {
    value.map_or_else(|| "unavailable".to_string(), |bytes| bytes.to_string())
}

impl StatsSource for ProcStats {
    fn mem_used(&self) -> Option<u64> {
        Self::read_kb("/proc/self/status", "VmRSS")
    }

    fn mem_peak(&self) -> Option<u64> {
        Self::read_kb("/proc/self/status", "VmHWM")
    }

    fn mem_free(&self) -> Option<u64> {
        Self::read_kb("/proc/meminfo", "MemFree")
    }

    fn mem_total(&self) -> Option<u64> {
        Self::read_kb("/proc/meminfo", "MemTotal")
    }
}
