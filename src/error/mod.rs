//! Error types for logging operations.
//!
//! This module provides:
//! - `LogError`: The crate-wide error type
//!
//! The core performs no local recovery: sink I/O failures are wrapped
//! with the sink id for context and surfaced to the immediate caller.
//! There is no retry and no fallback sink.

use std::io;

use thiserror::Error;

/// Errors surfaced by the logger and the global holder.
#[derive(Debug, Error)]
pub enum LogError {
    /// A logger instance already exists in the target holder.
    ///
    /// Returned by direct construction (`LoggerCell::init` / `try_init`)
    /// when the cell is occupied. Detect it with
    /// `matches!(err, LogError::AlreadyInitialized)` rather than by
    /// message text.
    #[error("logger is already initialized")]
    AlreadyInitialized,

    /// The sink failed while persisting a line or releasing its handle.
    #[error("sink `{target}`: {source}")]
    Sink {
        /// Identifier of the sink ("-" for console, file path for files)
        target: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl LogError {
    /// Wrap a sink I/O error with the id of the sink that produced it.
    pub fn sink(target: impl Into<String>, source: io::Error) -> Self {
        LogError::Sink {
            target: target.into(),
            source,
        }
    }
}
