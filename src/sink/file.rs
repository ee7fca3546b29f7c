//! File sink writing newline-terminated lines.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::LogSink;

/// Sink that appends one newline-terminated line per `log` call to a file.
///
/// The file is created fresh at construction, truncating any existing
/// content. An internal mutex serializes concurrent `log` calls against
/// each other and against `close`, so lines from different threads never
/// interleave.
///
/// The handle is released when the sink is dropped; [`FileSink::close`]
/// releases it early and reports flush/release errors. Logging after
/// `close` violates the sink's precondition and is reported as an
/// `io::Error`.
#[derive(Debug)]
pub struct FileSink {
    id: String,
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Create the sink, opening `path` for writing and truncating any
    /// existing content.
    pub fn create(path: PathBuf) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&path)?;
        let id = path.to_string_lossy().into_owned();

        Ok(Self {
            id,
            path,
            file: Mutex::new(Some(file)),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release the file handle.
    ///
    /// Holds the same lock as `log`, so an in-flight write always
    /// completes before the handle goes away. Syncs file contents to
    /// disk before releasing. Idempotent: closing an already-closed
    /// sink is a no-op.
    pub fn close(&self) -> io::Result<()> {
        let mut guard = self.file.lock().unwrap();
        match guard.take() {
            Some(file) => file.sync_all(),
            None => Ok(()),
        }
    }

    /// Whether `close` has already released the handle.
    pub fn is_closed(&self) -> bool {
        self.file.lock().unwrap().is_none()
    }

    fn closed_error(&self) -> io::Error {
        io::Error::new(
            io::ErrorKind::Other,
            format!("sink `{}` is closed", self.id),
        )
    }
}

impl LogSink for FileSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn log(&self, line: &str) -> io::Result<()> {
        let mut guard = self.file.lock().unwrap();
        let file = guard.as_mut().ok_or_else(|| self.closed_error())?;
        writeln!(file, "{line}")
    }
}
