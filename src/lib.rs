//! # unilog
//!
//! A strategy-driven logging facility with pluggable output sinks.
//!
//! ## Overview
//!
//! unilog provides:
//! - **Pluggable sinks**: Console, file, and uppercasing-file outputs
//!   behind one `LogSink` trait
//! - **One shared logger**: A process-wide instance obtained through
//!   `get_instance`, bound to its sink on first access
//! - **Fixed line format**: `"{timestamp} [{LEVEL}] {message}"` with
//!   second-resolution timestamps
//! - **Thread safety**: The logger serializes format-and-forward under
//!   its own lock; file sinks additionally lock their handle
//! - **Testability**: An explicit holder (`LoggerCell`), an in-memory
//!   sink, and a pinnable clock
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use unilog::{FileSink, get_instance};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sink = Arc::new(FileSink::create("app.log".into())?);
//!     let logger = get_instance(sink);
//!
//!     logger.info("application started")?;
//!     logger.warn("cache is cold")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Semantics
//!
//! - Every call is synchronous and blocking: when a `log` call returns,
//!   the line has been handed to the sink, not queued.
//! - There is no severity filtering; every message is emitted.
//! - Repeat `get_instance` calls return the existing logger and ignore
//!   the sink argument; use `try_init` when a second initialization
//!   must fail instead.
//! - Sink I/O failures propagate to the caller as `LogError::Sink`.
//!   There is no retry and no fallback sink.

// Core modules
pub mod builder;
pub mod clock;
pub mod config;
pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod sink;

// Re-exports for convenience
pub use builder::{LoggerBuilder, default_log_file_name};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LogConfig;
pub use error::LogError;
pub use global::{LoggerCell, get_instance, global, try_init};
pub use level::LogLevel;
pub use logger::{Logger, TIMESTAMP_FORMAT};
pub use sink::{ConsoleSink, FileSink, InMemorySink, LogSink, SinkKind, UppercaseFileSink};

/// Build a logger from a [`LogConfig`].
///
/// Resolves the sink choice (unrecognized choices fall back to the
/// console sink) and opens file-backed sinks eagerly.
pub fn build_logger_from_config(config: LogConfig) -> Result<Logger, LogError> {
    config.into_builder().build()
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
