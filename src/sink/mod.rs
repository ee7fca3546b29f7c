//! Output sinks for formatted log lines.
//!
//! This module provides:
//! - `LogSink`: Trait for output destinations
//! - `SinkKind`: Enum naming the built-in sink choices
//! - `ConsoleSink`: Writes lines to stdout
//! - `FileSink`: Writes newline-terminated lines to a file
//! - `UppercaseFileSink`: Uppercases lines, then delegates to a file
//! - `InMemorySink`: Records lines in memory, for testing

use std::fmt::Debug;
use std::io;

mod console;
mod file;
mod memory;
mod uppercase;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::InMemorySink;
pub use uppercase::UppercaseFileSink;

/// Trait for synchronous log sinks.
///
/// Implementors persist one already fully formatted line per `log` call.
/// The hand-off is synchronous: when `log` returns `Ok`, the line has
/// been written to the underlying destination, not queued. File-backed
/// implementations serialize concurrent callers internally so that two
/// lines never interleave.
pub trait LogSink: Send + Sync + Debug {
    /// Returns a unique identifier for this sink.
    ///
    /// This is used for error messages.
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Persist one formatted line.
    ///
    /// The line must not contain its trailing newline; sinks that need
    /// one (files) append it themselves.
    fn log(&self, line: &str) -> io::Result<()>;
}

/// Names the built-in sink choices a caller can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    /// Write lines to stdout
    Console,
    /// Write lines to a file
    File,
    /// Write uppercased lines to a file
    UppercaseFile,
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkKind::Console => write!(f, "console"),
            SinkKind::File => write!(f, "file"),
            SinkKind::UppercaseFile => write!(f, "uppercase_file"),
        }
    }
}

impl SinkKind {
    /// Parse a sink kind from a string.
    ///
    /// Matching is case-insensitive. Returns `None` for unrecognized
    /// choices; callers that want the console fallback behavior use
    /// [`SinkKind::from_choice`].
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "console" | "stdout" | "-" => Some(SinkKind::Console),
            "file" => Some(SinkKind::File),
            "uppercase_file" | "uppercase-file" | "uppercase" => Some(SinkKind::UppercaseFile),
            _ => None,
        }
    }

    /// Parse a sink choice, falling back to `Console` when unrecognized.
    pub fn from_choice(s: &str) -> Self {
        Self::from_str(s).unwrap_or(SinkKind::Console)
    }

    /// Whether this kind writes to a file and therefore needs a path.
    pub fn is_file_backed(&self) -> bool {
        matches!(self, SinkKind::File | SinkKind::UppercaseFile)
    }
}
