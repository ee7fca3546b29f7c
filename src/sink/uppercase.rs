//! Uppercasing wrapper around the file sink.

use std::io;
use std::path::{Path, PathBuf};

use super::{FileSink, LogSink};

/// Sink that uppercases each line, then delegates to a [`FileSink`].
///
/// The wrapper owns a plain file sink and adds exactly one behavior on
/// the way in. The transform uses `str::to_uppercase`, so non-ASCII
/// text is case-folded per Unicode rules. No state beyond the inner
/// sink.
#[derive(Debug)]
pub struct UppercaseFileSink {
    inner: FileSink,
}

impl UppercaseFileSink {
    /// Create the sink, opening `path` for writing and truncating any
    /// existing content.
    pub fn create(path: PathBuf) -> io::Result<Self> {
        Ok(Self {
            inner: FileSink::create(path)?,
        })
    }

    /// Wrap an already-open file sink.
    pub fn from_inner(inner: FileSink) -> Self {
        Self { inner }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Release the file handle. See [`FileSink::close`].
    pub fn close(&self) -> io::Result<()> {
        self.inner.close()
    }
}

impl LogSink for UppercaseFileSink {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn log(&self, line: &str) -> io::Result<()> {
        self.inner.log(&line.to_uppercase())
    }
}
