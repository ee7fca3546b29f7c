//! The logger: formats messages and forwards them to the bound sink.

use std::sync::{Arc, Mutex};

use crate::clock::{Clock, SystemClock};
use crate::error::LogError;
use crate::level::LogLevel;
use crate::sink::LogSink;

/// Timestamp layout used in every formatted line (second resolution).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats log messages and forwards them to a single bound sink.
///
/// The sink is fixed at construction; there is no swap operation. Each
/// `log` call builds the line `"{timestamp} [{LEVEL}] {message}"` and
/// hands it to the sink while holding the logger's own mutex, so the
/// whole format-and-forward sequence is one critical section: the order
/// in which threads acquire the lock is the order in which lines reach
/// the sink. File sinks lock again internally; the logger's lock is the
/// coarser, outer one.
///
/// Every call blocks until the line has been handed to the sink. Sink
/// failures propagate as [`LogError::Sink`]; nothing is retried.
#[derive(Debug)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    clock: Arc<dyn Clock>,
    lock: Mutex<()>,
}

impl Logger {
    /// Create a logger bound to `sink`, timestamping with the system clock.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::with_clock(sink, Arc::new(SystemClock))
    }

    /// Create a logger with an explicit clock.
    ///
    /// Tests pair this with [`FixedClock`](crate::FixedClock) to pin the
    /// timestamp in formatted lines.
    pub fn with_clock(sink: Arc<dyn LogSink>, clock: Arc<dyn Clock>) -> Self {
        Self {
            sink,
            clock,
            lock: Mutex::new(()),
        }
    }

    /// Get the bound sink.
    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }

    /// Format `message` with a timestamp and `level`, then forward the
    /// line to the sink.
    ///
    /// Holds the logger lock for the entire format-and-forward sequence;
    /// concurrent callers are serialized and their lines cannot
    /// interleave.
    pub fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let _guard = self.lock.lock().unwrap();

        let timestamp = self.clock.now().format(TIMESTAMP_FORMAT);
        let line = format!("{timestamp} [{level}] {message}");

        self.sink
            .log(&line)
            .map_err(|e| LogError::sink(self.sink.id(), e))
    }

    /// Log `message` at `TRACE` level.
    pub fn trace(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Trace, message)
    }

    /// Log `message` at `INFO` level.
    pub fn info(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Info, message)
    }

    /// Log `message` at `WARN` level.
    pub fn warn(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Warn, message)
    }

    /// Log `message` at `ERROR` level.
    pub fn error(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Error, message)
    }

    /// Log `message` at `FATAL` level.
    pub fn fatal(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Fatal, message)
    }
}
