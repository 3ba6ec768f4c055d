//! # Integration Tests
//!
//! Integration and end-to-end tests.
//!
//! Responsible for:
//! - Contract snapshot tests
//! - Config -> logger -> sink e2e tests (no host process required)
//! - Fan-out serialization under concurrent dispatch

#[cfg(test)]
mod support {
    use contracts::{ContractError, EventSink, LogEvent};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Writer appending to a shared buffer, so tests keep reading after the
    /// sink has been moved into the logger
    #[derive(Clone)]
    pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        pub fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self(Arc::clone(&buf)), buf)
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Sink writing each line in two torn halves with a scheduling point
    /// between, so unserialized fan-out shows up as corrupted lines
    pub struct TornSink {
        pub name: String,
        pub buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl EventSink for TornSink {
        fn name(&self) -> &str {
            &self.name
        }

        fn write(&mut self, event: &LogEvent<'_>) -> Result<(), ContractError> {
            let line = format!("<{} {}>", event.level, event.message);
            let (head, tail) = line.split_at(line.len() / 2);
            self.buffer.lock().unwrap().extend_from_slice(head.as_bytes());
            std::thread::yield_now();
            let mut buf = self.buffer.lock().unwrap();
            buf.extend_from_slice(tail.as_bytes());
            buf.push(b'\n');
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ContractError> {
            Ok(())
        }
    }

    pub fn utf8(buf: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buf.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        // verify the contracts crate surface
        let _ = contracts::ConfigVersion::V1;
        assert_eq!(contracts::Level::ALL.len(), 6);
    }
}

#[cfg(test)]
mod e2e_tests {
    use super::support::{utf8, SharedBuf};
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::Level;
    use dispatcher::{create_logger, Logger, LoggerConfig};

    /// End-to-end: TOML blueprint -> logger -> file sink
    #[test]
    fn test_e2e_config_to_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warnings.log");
        let toml = format!(
            r#"
[console]
quiet = true

[[sinks]]
name = "warn_file"
sink_type = "file"
min_level = "warn"
[sinks.params]
path = "{}"
"#,
            path.display()
        );

        let blueprint = ConfigLoader::load_from_str(&toml, ConfigFormat::Toml).unwrap();
        let logger = create_logger(&blueprint).unwrap();

        dispatcher::info!(logger, "below threshold").unwrap();
        dispatcher::error!(logger, "disk half full").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("disk half full"));
        assert!(contents.contains("ERROR"));
    }

    /// Spec walk: one INFO event, a WARN sink and a TRACE sink
    #[test]
    fn test_one_info_event_warn_and_trace_sinks() {
        let logger = Logger::new(LoggerConfig {
            quiet: true,
            ..LoggerConfig::default()
        });
        let (warn_writer, warn_buf) = SharedBuf::new();
        let (trace_writer, trace_buf) = SharedBuf::new();
        logger
            .attach_writer("warn_sink", warn_writer, Level::Warn)
            .unwrap();
        logger
            .attach_writer("trace_sink", trace_writer, Level::Trace)
            .unwrap();

        dispatcher::info!(logger, "just one info event").unwrap();

        let trace_out = utf8(&trace_buf);
        assert_eq!(trace_out.lines().count(), 1);
        assert!(trace_out.contains("just one info event"));
        assert!(warn_buf.lock().unwrap().is_empty());
    }

    /// Per-sink thresholds are independent of the global console threshold
    #[test]
    fn test_sink_threshold_independent_of_global() {
        let logger = Logger::new(LoggerConfig {
            quiet: true,
            ..LoggerConfig::default()
        });
        logger.set_level(Level::Fatal);

        let (writer, buf) = SharedBuf::new();
        logger.attach_writer("verbose_file", writer, Level::Trace).unwrap();

        dispatcher::debug!(logger, "console would drop this").unwrap();
        assert_eq!(utf8(&buf).lines().count(), 1);
    }

    /// Delivery counters reflect a short run
    #[test]
    fn test_metrics_after_run() {
        let logger = Logger::new(LoggerConfig {
            quiet: true,
            ..LoggerConfig::default()
        });
        let (everything, _) = SharedBuf::new();
        let (errors_only, _) = SharedBuf::new();
        logger.attach_writer("everything", everything, Level::Trace).unwrap();
        logger.attach_writer("errors_only", errors_only, Level::Error).unwrap();

        dispatcher::trace!(logger, "a").unwrap();
        dispatcher::info!(logger, "b").unwrap();
        dispatcher::error!(logger, "c").unwrap();

        let metrics = logger.metrics().unwrap();
        assert_eq!(metrics[0].0, "everything");
        assert_eq!(metrics[0].1.write_count, 3);
        assert_eq!(metrics[1].0, "errors_only");
        assert_eq!(metrics[1].1.write_count, 1);
        assert_eq!(metrics[1].1.filtered_count, 2);
    }
}

#[cfg(test)]
mod concurrency_tests {
    use super::support::{utf8, TornSink};
    use contracts::Level;
    use dispatcher::{Logger, LoggerConfig};
    use std::sync::{Arc, Mutex};
    use std::thread;

    /// Under the default (mutex-backed) discipline, concurrent dispatch
    /// never produces an interleaved or partial line in a sink's output
    #[test]
    fn test_concurrent_dispatch_never_tears_lines() {
        let logger = Arc::new(Logger::new(LoggerConfig {
            quiet: true,
            ..LoggerConfig::default()
        }));
        let buffer = Arc::new(Mutex::new(Vec::new()));
        logger
            .register_sink(
                Box::new(TornSink {
                    name: "torn".to_string(),
                    buffer: Arc::clone(&buffer),
                }),
                Level::Trace,
            )
            .unwrap();

        let threads = 8;
        let per_thread = 25;
        let mut handles = Vec::new();
        for t in 0..threads {
            let logger = Arc::clone(&logger);
            handles.push(thread::spawn(move || {
                for i in 0..per_thread {
                    dispatcher::info!(logger, "thread {} message {} payload 0123456789abcdef", t, i)
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let out = utf8(&buffer);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), threads * per_thread);
        for line in lines {
            assert!(line.starts_with("<INFO"), "torn line: {line}");
            assert!(line.ends_with("payload 0123456789abcdef>"), "torn line: {line}");
        }
    }

    /// Registration racing dispatch stays consistent
    #[test]
    fn test_concurrent_registration_and_dispatch() {
        let logger = Arc::new(Logger::new(LoggerConfig {
            quiet: true,
            ..LoggerConfig::default()
        }));

        let mut handles = Vec::new();
        for t in 0..4 {
            let logger = Arc::clone(&logger);
            handles.push(thread::spawn(move || {
                for i in 0..4 {
                    let buffer = Arc::new(Mutex::new(Vec::new()));
                    logger
                        .register_sink(
                            Box::new(TornSink {
                                name: format!("sink-{t}-{i}"),
                                buffer,
                            }),
                            Level::Trace,
                        )
                        .unwrap();
                }
            }));
        }
        for t in 0..4 {
            let logger = Arc::clone(&logger);
            handles.push(thread::spawn(move || {
                for i in 0..10 {
                    dispatcher::warn!(logger, "burst {} from {}", i, t).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(logger.sink_count().unwrap(), 16);
        assert_eq!(logger.metrics().unwrap().len(), 16);
    }
}
