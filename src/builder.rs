//! Builder for constructing loggers from a sink choice.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;

use crate::clock::Clock;
use crate::error::LogError;
use crate::logger::Logger;
use crate::sink::{ConsoleSink, FileSink, LogSink, SinkKind, UppercaseFileSink};

/// Builds a [`Logger`] from a sink choice and an optional file path.
///
/// This is the strategy-selection surface: raw choices arrive as
/// strings (`"console"`, `"file"`, `"uppercase_file"`), unrecognized
/// choices fall back to the console sink, and file-backed choices
/// without an explicit path get a timestamped default filename.
pub struct LoggerBuilder {
    kind: SinkKind,
    path: Option<PathBuf>,
    clock: Option<Arc<dyn Clock>>,
}

impl LoggerBuilder {
    /// Create a builder targeting the console sink.
    pub fn new() -> Self {
        Self {
            kind: SinkKind::Console,
            path: None,
            clock: None,
        }
    }

    /// Set the sink kind.
    pub fn with_kind(mut self, kind: SinkKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the sink kind from a raw choice string.
    ///
    /// Unrecognized choices resolve to [`SinkKind::Console`].
    pub fn with_choice(mut self, choice: &str) -> Self {
        self.kind = SinkKind::from_choice(choice);
        self
    }

    /// Set the output file path for file-backed sinks.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Install an explicit clock instead of the system clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Get the resolved sink kind.
    pub fn kind(&self) -> SinkKind {
        self.kind
    }

    /// Construct the sink this builder describes.
    ///
    /// File-backed sinks open (and truncate) their file here; open
    /// failures are wrapped with the target path.
    pub fn build_sink(&self) -> Result<Arc<dyn LogSink>, LogError> {
        match self.kind {
            SinkKind::Console => Ok(Arc::new(ConsoleSink::new())),
            SinkKind::File => {
                let path = self.resolve_path();
                let sink = FileSink::create(path.clone())
                    .map_err(|e| LogError::sink(path.to_string_lossy(), e))?;
                Ok(Arc::new(sink))
            }
            SinkKind::UppercaseFile => {
                let path = self.resolve_path();
                let sink = UppercaseFileSink::create(path.clone())
                    .map_err(|e| LogError::sink(path.to_string_lossy(), e))?;
                Ok(Arc::new(sink))
            }
        }
    }

    /// Construct the logger, consuming the builder.
    pub fn build(self) -> Result<Logger, LogError> {
        let sink = self.build_sink()?;
        Ok(match self.clock {
            Some(clock) => Logger::with_clock(sink, clock),
            None => Logger::new(sink),
        })
    }

    fn resolve_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_log_file_name)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Default filename for file-backed sinks when no path is given.
///
/// Format: `unilog-YYYY-MM-DD.HH-MM-SS.log` in the current directory.
pub fn default_log_file_name() -> PathBuf {
    PathBuf::from(format!(
        "unilog-{}.log",
        Local::now().format("%Y-%m-%d.%H-%M-%S")
    ))
}
