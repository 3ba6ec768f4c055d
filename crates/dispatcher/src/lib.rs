//! # Dispatcher
//!
//! Leveled log fan-out module.
//!
//! Responsible for:
//! - Building a `LogEvent` per render (call site + level + wall-clock stamp)
//! - Fan-out to the console sink plus every registered sink
//! - Pluggable mutual-exclusion discipline around each pass
//!
//! ## Example
//!
//! ```no_run
//! use dispatcher::{Level, Logger, LoggerConfig};
//!
//! let logger = Logger::new(LoggerConfig::default());
//! logger.set_level(Level::Info);
//!
//! let file = std::fs::File::create("app.log").unwrap();
//! logger.attach_writer("app_file", file, Level::Trace).unwrap();
//!
//! dispatcher::info!(logger, "started with {} workers", 4).unwrap();
//! ```

pub mod dispatcher;
pub mod error;
pub mod lock;
mod macros;
pub mod metrics;
pub mod sinks;

pub use contracts::{
    CallSite, ColorMode, ContractError, EventSink, Level, LogBlueprint, LogEvent, SinkConfig,
    SinkType,
};
pub use dispatcher::{create_logger, Logger, LoggerConfig, DEFAULT_MAX_SINKS};
pub use error::{DispatchError, LockOp};
pub use lock::{DefaultLock, HookLock, LockDiscipline, LockHook, PlatformLock};
pub use metrics::{MetricsSnapshot, SinkMetrics};
pub use sinks::{ConsoleSink, WriterSink};
