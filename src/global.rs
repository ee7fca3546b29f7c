//! Process-wide logger holder.
//!
//! This module provides:
//! - `LoggerCell`: An explicit, thread-safe, lazily-initialized holder
//! - `get_instance` / `try_init` / `global`: Free functions over the
//!   process-wide cell
//!
//! The holder is an ordinary value rather than a language-level global:
//! tests construct private cells and inject or reset them freely, while
//! production code goes through the one `static` cell behind the free
//! functions.

use std::sync::{Arc, Mutex};

use crate::error::LogError;
use crate::logger::Logger;
use crate::sink::LogSink;

/// A thread-safe, lazily-initialized slot holding at most one [`Logger`].
///
/// Two-state lifecycle: the cell starts uninitialized and becomes active
/// on the first `get_or_init` or `init` call. There is no transition
/// back except the explicit [`LoggerCell::reset`] test seam.
#[derive(Debug)]
pub struct LoggerCell {
    slot: Mutex<Option<Arc<Logger>>>,
}

impl LoggerCell {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the shared logger, constructing it on first call.
    ///
    /// The very first call binds the logger to `sink`. **Every later
    /// call returns the existing logger unchanged and silently ignores
    /// the sink argument**, mirroring the classic get-instance contract.
    /// Callers that must not lose a sink choice should use
    /// [`LoggerCell::init`], which fails loudly instead.
    pub fn get_or_init(&self, sink: Arc<dyn LogSink>) -> Arc<Logger> {
        let mut slot = self.slot.lock().unwrap();
        slot.get_or_insert_with(|| Arc::new(Logger::new(sink)))
            .clone()
    }

    /// Install `logger` as the shared instance.
    ///
    /// This is the direct-construction path: it fails with
    /// [`LogError::AlreadyInitialized`] when the cell is already
    /// occupied, leaving the existing instance untouched.
    pub fn init(&self, logger: Logger) -> Result<Arc<Logger>, LogError> {
        let mut slot = self.slot.lock().unwrap();
        if slot.is_some() {
            return Err(LogError::AlreadyInitialized);
        }

        let logger = Arc::new(logger);
        *slot = Some(logger.clone());
        Ok(logger)
    }

    /// Return the shared logger if the cell has been initialized.
    pub fn get(&self) -> Option<Arc<Logger>> {
        self.slot.lock().unwrap().clone()
    }

    /// Whether the cell holds a logger.
    pub fn is_initialized(&self) -> bool {
        self.slot.lock().unwrap().is_some()
    }

    /// Empty the cell so the next `get_or_init`/`init` constructs anew.
    ///
    /// A test seam: loggers already handed out keep working, they are
    /// just no longer the shared instance.
    pub fn reset(&self) {
        self.slot.lock().unwrap().take();
    }
}

impl Default for LoggerCell {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide cell backing [`get_instance`] and [`try_init`].
static GLOBAL: LoggerCell = LoggerCell::new();

/// Return the process-wide logger, constructing it with `sink` on the
/// first call. See [`LoggerCell::get_or_init`] for the repeat-call
/// semantics.
pub fn get_instance(sink: Arc<dyn LogSink>) -> Arc<Logger> {
    GLOBAL.get_or_init(sink)
}

/// Install `logger` as the process-wide instance, failing with
/// [`LogError::AlreadyInitialized`] if one already exists.
pub fn try_init(logger: Logger) -> Result<Arc<Logger>, LogError> {
    GLOBAL.init(logger)
}

/// Return the process-wide logger if it has been initialized.
pub fn global() -> Option<Arc<Logger>> {
    GLOBAL.get()
}
