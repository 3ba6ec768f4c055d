//! Dispatcher error types

use std::fmt;

use thiserror::Error;

/// Lock operation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOp {
    /// Acquiring the discipline
    Acquire,
    /// Releasing the discipline
    Release,
}

impl fmt::Display for LockOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockOp::Acquire => f.write_str("acquire"),
            LockOp::Release => f.write_str("release"),
        }
    }
}

/// Dispatcher-specific errors
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Malformed input to a registration or configuration call
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Sink registry is full
    #[error("sink registry full: limit of {limit} sinks reached")]
    CapacityExceeded { limit: usize },

    /// Underlying mutual-exclusion primitive reported an error
    #[error("lock {op} failed: {message}")]
    LockFailure { op: LockOp, message: String },

    /// Sink creation error
    #[error("failed to create sink '{name}': {message}")]
    SinkCreation { name: String, message: String },
}

impl DispatchError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a lock failure error
    pub fn lock_failure(op: LockOp, message: impl Into<String>) -> Self {
        Self::LockFailure {
            op,
            message: message.into(),
        }
    }

    /// Create a sink creation error
    pub fn sink_creation(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkCreation {
            name: name.into(),
            message: message.into(),
        }
    }
}
