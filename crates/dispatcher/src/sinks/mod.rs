//! Sink implementations
//!
//! Contains ConsoleSink and WriterSink.

mod console;
mod writer;

pub use self::console::ConsoleSink;
pub use self::writer::WriterSink;
