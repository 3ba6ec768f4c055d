//! Leveled logging macros
//!
//! Each macro captures the call site (`file!()`, `module_path!()`,
//! `line!()`) and forwards to [`Logger::dispatch`](crate::Logger::dispatch).
//! The format template is restricted to a string literal, so a
//! runtime-chosen format string is rejected at compile time.
//!
//! All six macros return the dispatch `Result`; callers that don't care can
//! `let _ =` it.

/// Dispatch worker shared by the leveled macros
#[macro_export]
macro_rules! log_event {
    ($logger:expr, $level:expr, $fmt:literal $($arg:tt)*) => {
        $logger.dispatch(
            $level,
            $crate::CallSite::new(file!(), module_path!(), line!()),
            format_args!($fmt $($arg)*),
        )
    };
}

/// Log at TRACE level
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log at DEBUG level
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log at INFO level
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log at WARNING level
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log at ERROR level
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log at FATAL level
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::Level::Fatal, $($arg)+)
    };
}
