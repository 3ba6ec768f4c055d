//! Host-process statistics collaborators
//!
//! The logging workspace consumes these interfaces; implementations belong
//! to the host process (the CLI ships a `/proc` reader on Linux).

use serde::{Deserialize, Serialize};

/// Point-in-time memory readings, in bytes
///
/// `None` marks a failed read of that particular counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    /// Resident set size of the current process
    pub used: Option<u64>,
    /// Peak resident set size of the current process
    pub peak: Option<u64>,
    /// Free memory on the host
    pub free: Option<u64>,
    /// Total memory on the host
    pub total: Option<u64>,
}

/// Memory statistics source
pub trait StatsSource {
    /// Current resident memory of the process, in bytes
    fn mem_used(&self) -> Option<u64>;

    /// Peak resident memory of the process, in bytes
    fn mem_peak(&self) -> Option<u64>;

    /// Free host memory, in bytes
    fn mem_free(&self) -> Option<u64>;

    /// Total host memory, in bytes
    fn mem_total(&self) -> Option<u64>;

    /// Collect all four counters in one snapshot
    fn memory(&self) -> MemorySnapshot {
        MemorySnapshot {
            used: self.mem_used(),
            peak: self.mem_peak(),
            free: self.mem_free(),
            total: self.mem_total(),
        }
    }
}

/// One-shot CPU misalignment-trap toggle
///
/// Fire-and-forget: no state, no return value, no error channel.
pub trait TrapControl {
    /// Enable alignment traps for the current process
    fn enable_alignment_traps(&self);
}
