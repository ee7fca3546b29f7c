//! Configuration for constructing a logger.

use serde::Deserialize;

use crate::builder::LoggerBuilder;
use crate::sink::SinkKind;

/// Configuration for a logger, deserializable from YAML/JSON.
///
/// The sink choice stays a plain string so unrecognized values keep the
/// console-fallback behavior instead of failing deserialization.
///
/// ```yaml
/// sink: uppercase_file
/// path: app.log
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Sink choice: "console", "file" or "uppercase_file"
    #[serde(default = "default_sink_choice")]
    pub sink: String,
    /// File path (for file-backed sinks)
    #[serde(default)]
    pub path: Option<String>,
}

fn default_sink_choice() -> String {
    "console".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            sink: default_sink_choice(),
            path: None,
        }
    }
}

impl LogConfig {
    /// Create a new console configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sink choice.
    pub fn with_sink(mut self, sink: impl Into<String>) -> Self {
        self.sink = sink.into();
        self
    }

    /// Set the output file path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Resolve the sink choice, falling back to console when unrecognized.
    pub fn kind(&self) -> SinkKind {
        SinkKind::from_choice(&self.sink)
    }

    /// Convert into a [`LoggerBuilder`] with the resolved kind and path.
    pub fn into_builder(self) -> LoggerBuilder {
        let mut builder = LoggerBuilder::new().with_kind(self.kind());
        if let Some(path) = self.path {
            builder = builder.with_path(path);
        }
        builder
    }
}
