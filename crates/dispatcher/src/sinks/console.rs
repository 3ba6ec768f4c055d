//! ConsoleSink - renders events to standard error

use std::io::{self, Write};

use contracts::{ColorMode, ContractError, EventSink, LogEvent};

/// Per-level ANSI color codes, TRACE..FATAL
const LEVEL_COLORS: [&str; 6] = [
    "\x1b[94m", "\x1b[36m", "\x1b[32m", "\x1b[33m", "\x1b[31m", "\x1b[35m",
];
const DIM: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Always-present sink rendering to standard error
///
/// Line shape: `HH:MM:SS LEVEL [file]:module:line: message`, level padded
/// to a 7-character column, flushed after every write. Color and plain
/// modes produce identical text content.
pub struct ConsoleSink {
    name: String,
    color: ColorMode,
}

impl ConsoleSink {
    /// Create a console sink with the given color mode
    pub fn new(color: ColorMode) -> Self {
        Self {
            name: "console".to_string(),
            color,
        }
    }

    /// Render one event into `out`
    pub fn render(&self, out: &mut impl Write, event: &LogEvent<'_>) -> io::Result<()> {
        let time = event.timestamp.format("%H:%M:%S");
        match self.color {
            ColorMode::Plain => writeln!(
                out,
                "{} {:<7} {} {}",
                time, event.level, event.callsite, event.message
            ),
            ColorMode::Ansi => writeln!(
                out,
                "{} {}{:<7}{RESET} {DIM}{}{RESET} {}",
                time,
                LEVEL_COLORS[event.level as usize],
                event.level,
                event.callsite,
                event.message
            ),
        }
    }
}

impl EventSink for ConsoleSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, event: &LogEvent<'_>) -> Result<(), ContractError> {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        self.render(&mut handle, event)
            .and_then(|()| handle.flush())
            .map_err(|e| ContractError::sink_write(&self.name, e.to_string()))
    }

    fn flush(&mut self) -> Result<(), ContractError> {
        io::stderr()
            .flush()
            .map_err(|e| ContractError::sink_write(&self.name, e.to_string()))
    }
}
