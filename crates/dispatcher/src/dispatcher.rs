//! Logger - fan-out core for leveled log events

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Mutex;

use contracts::{
    CallSite, ColorMode, EventSink, Level, LogBlueprint, LogEvent, SinkConfig, SinkType,
};

use crate::error::{DispatchError, LockOp};
use crate::lock::{DefaultLock, LockDiscipline, LockHook};
use crate::metrics::{MetricsSnapshot, SinkMetrics};
use crate::sinks::{ConsoleSink, WriterSink};

/// Default upper bound on registered sinks
pub const DEFAULT_MAX_SINKS: usize = 63;

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Global minimum level for console output
    pub min_level: Level,
    /// Suppress console output (registered sinks unaffected)
    pub quiet: bool,
    /// Console color mode
    pub color: ColorMode,
    /// Upper bound on registered sinks
    pub max_sinks: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: Level::Trace,
            quiet: false,
            color: ColorMode::Plain,
            max_sinks: DEFAULT_MAX_SINKS,
        }
    }
}

/// One registered sink with its threshold and delivery counters
struct Registration {
    min_level: Level,
    metrics: SinkMetrics,
    sink: Box<dyn EventSink>,
}

/// State mutated and read under lock during dispatch and registration
struct Shared {
    console: ConsoleSink,
    sinks: Vec<Registration>,
}

/// The fan-out dispatcher
///
/// An explicitly constructed, long-lived instance: callers hold a reference
/// and pass it to the leveled macros. Tests construct isolated instances.
///
/// The registry cell is internally synchronized; the configured
/// [`LockDiscipline`] serializes one full fan-out pass (console plus every
/// registered sink) and is the operation whose failures are reported as
/// [`DispatchError::LockFailure`].
pub struct Logger {
    min_level: AtomicU8,
    quiet: AtomicBool,
    max_sinks: usize,
    discipline: Box<dyn LockDiscipline>,
    shared: Mutex<Shared>,
}

impl Logger {
    /// Create a logger with the build-selected default lock discipline
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_discipline(config, Box::new(DefaultLock::default()))
    }

    /// Create a logger with an explicit lock discipline
    pub fn with_discipline(config: LoggerConfig, discipline: Box<dyn LockDiscipline>) -> Self {
        Self {
            min_level: AtomicU8::new(config.min_level as u8),
            quiet: AtomicBool::new(config.quiet),
            max_sinks: config.max_sinks,
            discipline,
            shared: Mutex::new(Shared {
                console: ConsoleSink::new(config.color),
                sinks: Vec::new(),
            }),
        }
    }

    /// Set the global minimum level for console output
    ///
    /// Visible to all subsequent dispatch calls; sink thresholds unaffected.
    pub fn set_level(&self, level: Level) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    /// Current global minimum level
    pub fn level(&self) -> Level {
        let raw = self.min_level.load(Ordering::Relaxed);
        Level::ALL
            .get(raw as usize)
            .copied()
            .unwrap_or(Level::Trace)
    }

    /// Toggle console output; registered sinks are unaffected
    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    /// Whether console output is suppressed
    pub fn quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }

    /// Install a caller-supplied lock hook
    ///
    /// Meaningful under the `external-lock` backend; a successful no-op
    /// under a native lock backend.
    ///
    /// # Errors
    /// Returns [`DispatchError::LockFailure`] when the hook slot is
    /// unusable.
    pub fn set_lock_hook(&self, hook: LockHook) -> Result<(), DispatchError> {
        self.discipline.install_hook(hook)
    }

    /// Append a sink to the registry
    ///
    /// Registrations keep insertion order, allow duplicate destinations,
    /// and cannot be removed.
    ///
    /// # Errors
    /// - [`DispatchError::InvalidArgument`] for an empty sink name (the
    ///   registry is untouched)
    /// - [`DispatchError::CapacityExceeded`] when the registry already
    ///   holds `max_sinks` entries
    /// - [`DispatchError::LockFailure`] from the discipline; a release
    ///   failure takes precedence over the registration outcome
    pub fn register_sink(
        &self,
        sink: Box<dyn EventSink>,
        min_level: Level,
    ) -> Result<(), DispatchError> {
        if sink.name().is_empty() {
            return Err(DispatchError::invalid_argument(
                "sink name must not be empty",
            ));
        }

        self.discipline.acquire()?;
        let outcome = self.append(sink, min_level);
        self.discipline.release()?;
        outcome
    }

    /// Register a [`WriterSink`] around an arbitrary writable destination
    pub fn attach_writer<W: Write + Send + 'static>(
        &self,
        name: impl Into<String>,
        writer: W,
        min_level: Level,
    ) -> Result<(), DispatchError> {
        self.register_sink(Box::new(WriterSink::new(name, writer)), min_level)
    }

    /// Dispatch one event to the console and every qualifying sink
    ///
    /// The entire fan-out happens inside one acquire/release pair. Sink
    /// render failures are counted per registration and never surface
    /// here.
    ///
    /// # Errors
    /// [`DispatchError::LockFailure`] only: an acquire failure returns
    /// before anything renders; a release failure takes precedence over a
    /// successful fan-out.
    pub fn dispatch(
        &self,
        level: Level,
        callsite: CallSite,
        message: fmt::Arguments<'_>,
    ) -> Result<(), DispatchError> {
        self.discipline.acquire()?;
        let outcome = self.fan_out(level, callsite, message);
        self.discipline.release()?;
        outcome
    }

    /// Per-registration metrics snapshots, in registration order
    pub fn metrics(&self) -> Result<Vec<(String, MetricsSnapshot)>, DispatchError> {
        let shared = self.lock_shared()?;
        Ok(shared
            .sinks
            .iter()
            .map(|reg| (reg.sink.name().to_string(), reg.metrics.snapshot()))
            .collect())
    }

    /// Number of registered sinks
    pub fn sink_count(&self) -> Result<usize, DispatchError> {
        Ok(self.lock_shared()?.sinks.len())
    }

    /// Poisoning of the registry cell is reported as an acquire failure
    fn lock_shared(&self) -> Result<std::sync::MutexGuard<'_, Shared>, DispatchError> {
        self.shared
            .lock()
            .map_err(|e| DispatchError::lock_failure(LockOp::Acquire, e.to_string()))
    }

    fn append(&self, sink: Box<dyn EventSink>, min_level: Level) -> Result<(), DispatchError> {
        let mut shared = self.lock_shared()?;
        if shared.sinks.len() >= self.max_sinks {
            return Err(DispatchError::CapacityExceeded {
                limit: self.max_sinks,
            });
        }
        shared.sinks.push(Registration {
            min_level,
            metrics: SinkMetrics::new(),
            sink,
        });
        Ok(())
    }

    fn fan_out(
        &self,
        level: Level,
        callsite: CallSite,
        message: fmt::Arguments<'_>,
    ) -> Result<(), DispatchError> {
        let mut shared = self.lock_shared()?;
        let shared = &mut *shared;

        if !self.quiet() && level.passes(self.level()) {
            // console render is best-effort like any other sink
            let event = LogEvent::stamped(level, callsite, message);
            let _ = shared.console.write(&event);
        }

        for reg in &mut shared.sinks {
            if !level.passes(reg.min_level) {
                reg.metrics.inc_filtered_count();
                continue;
            }
            // re-stamped so each sink observes its own wall-clock time
            let event = LogEvent::stamped(level, callsite, message);
            match reg.sink.write(&event) {
                Ok(()) => reg.metrics.inc_write_count(),
                Err(_) => reg.metrics.inc_failure_count(),
            }
        }

        Ok(())
    }
}

/// Convenience function to build a logger from a configuration blueprint
pub fn create_logger(blueprint: &LogBlueprint) -> Result<Logger, DispatchError> {
    let logger = Logger::new(LoggerConfig {
        min_level: blueprint.console.min_level,
        quiet: blueprint.console.quiet,
        color: blueprint.console.color,
        max_sinks: blueprint.max_sinks,
    });
    for sink_config in &blueprint.sinks {
        let sink = create_sink(sink_config)?;
        logger.register_sink(sink, sink_config.min_level)?;
    }
    Ok(logger)
}

/// Create a sink from configuration
fn create_sink(config: &SinkConfig) -> Result<Box<dyn EventSink>, DispatchError> {
    match config.sink_type {
        SinkType::File => {
            let path = config
                .params
                .get("path")
                .filter(|p| !p.is_empty())
                .ok_or_else(|| DispatchError::sink_creation(&config.name, "missing `path` param"))?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| DispatchError::sink_creation(&config.name, e.to_string()))?;
            Ok(Box::new(WriterSink::new(&config.name, file)))
        }
        SinkType::Stdout => Ok(Box::new(WriterSink::new(&config.name, io::stdout()))),
        SinkType::Stderr => Ok(Box::new(WriterSink::new(&config.name, io::stderr()))),
    }
}
