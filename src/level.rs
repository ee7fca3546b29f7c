//! Severity levels for log messages.

/// Represents the severity of a log message.
///
/// Levels carry no filtering semantics: every message is forwarded to the
/// sink regardless of its level. The level only appears in the formatted
/// line, rendered exactly as `TRACE`, `INFO`, `WARN`, `ERROR` or `FATAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Fine-grained tracing output
    Trace,
    /// Informational messages
    Info,
    /// Something looks wrong but execution continues
    Warn,
    /// An operation failed
    Error,
    /// An unrecoverable failure
    Fatal,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LogLevel {
    /// The fixed level string embedded in formatted lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Parse a level from a string.
    ///
    /// Matching is case-insensitive. Returns `None` for unknown names.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "fatal" => Some(LogLevel::Fatal),
            _ => None,
        }
    }

    /// All levels, in increasing severity order.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Trace,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
            LogLevel::Fatal,
        ]
    }
}
