//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-crate data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Time Model
//! - Events carry a wall-clock timestamp (`chrono::DateTime<Local>`)
//! - The stamp is taken immediately before each sink render, not once per dispatch

mod config;
mod error;
mod event;
mod level;
mod sink;
mod stats;

pub use config::*;
pub use error::ContractError;
pub use event::{CallSite, LogEvent};
pub use level::Level;
pub use sink::EventSink;
pub use stats::{MemorySnapshot, StatsSource, TrapControl};
