//! In-memory sink implementation for testing.

use std::io;
use std::sync::{Arc, Mutex};

use super::LogSink;

/// In-memory sink that records every line it receives.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// logger and keep another for assertions.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    lines: Arc<Mutex<Vec<String>>>,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Get the recorded lines joined with newlines, one per line, with
    /// a trailing newline when non-empty (the file sink's layout).
    pub fn contents_string(&self) -> String {
        let lines = self.lines.lock().unwrap();
        if lines.is_empty() {
            String::new()
        } else {
            format!("{}\n", lines.join("\n"))
        }
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    /// Check if no lines were recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }

    /// Clear the recorded lines.
    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl LogSink for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn log(&self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}
