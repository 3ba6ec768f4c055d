//! EventSink trait - Dispatcher output interface
//!
//! Defines the abstract interface for Sinks.

use crate::{ContractError, LogEvent};

/// Event output trait
///
/// All sink implementations must implement this trait. A sink owns its
/// destination; the dispatcher only invokes it with a borrowed event.
pub trait EventSink: Send {
    /// Sink name (used for metrics and error reporting)
    fn name(&self) -> &str;

    /// Render one event to the destination
    ///
    /// # Errors
    /// Returns write error (should include context). Render failures are
    /// the sink's own concern: the dispatcher counts them and continues
    /// the fan-out without reporting them to the dispatch caller.
    fn write(&mut self, event: &LogEvent<'_>) -> Result<(), ContractError>;

    /// Flush buffer (if any)
    fn flush(&mut self) -> Result<(), ContractError>;
}
