//! WriterSink - renders events to an arbitrary byte stream

use std::io::Write;

use contracts::{ContractError, EventSink, LogEvent};

/// Sink wrapping a writable destination (file, stdout, in-memory buffer)
///
/// Line shape: `YYYY-MM-DD HH:MM:SS LEVEL [file]:module:line: message`,
/// level padded to a 7-character column, flushed after every write.
pub struct WriterSink<W: Write + Send> {
    name: String,
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    /// Create a writer sink owning `writer`
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
        }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> EventSink for WriterSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&mut self, event: &LogEvent<'_>) -> Result<(), ContractError> {
        writeln!(
            self.writer,
            "{} {:<7} {} {}",
            event.timestamp.format("%Y-%m-%d %H:%M:%S"),
            event.level,
            event.callsite,
            event.message
        )
        .and_then(|()| self.writer.flush())
        .map_err(|e| ContractError::sink_write(&self.name, e.to_string()))
    }

    fn flush(&mut self) -> Result<(), ContractError> {
        self.writer
            .flush()
            .map_err(|e| ContractError::sink_write(&self.name, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{CallSite, Level};
    use std::io;

    #[test]
    fn test_writer_sink_line_shape() {
        let mut sink = WriterSink::new("buffer", Vec::new());
        let site = CallSite::new("src/job.rs", "job::retry", 77);
        sink.write(&LogEvent::stamped(
            Level::Error,
            site,
            format_args!("attempt {} failed", 2),
        ))
        .unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.ends_with("[src/job.rs]:job::retry:77: attempt 2 failed\n"));
        // date prefix: YYYY-MM-DD HH:MM:SS
        let bytes = out.as_bytes();
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
        assert!(out.contains(" ERROR   ["));
    }

    struct FailWriter;

    impl Write for FailWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_a_sink_write_error() {
        let mut sink = WriterSink::new("broken", FailWriter);
        let site = CallSite::new("a.rs", "m", 1);
        let err = sink
            .write(&LogEvent::stamped(Level::Info, site, format_args!("x")))
            .unwrap_err();
        assert!(matches!(err, ContractError::SinkWrite { .. }));
    }
}
