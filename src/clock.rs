//! Clock abstraction for timestamping log lines.
//!
//! The logger reads wall-clock time through the `Clock` trait so that
//! tests can pin timestamps instead of matching against `Local::now()`.

use std::fmt::Debug;

use chrono::{DateTime, Local};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + Debug {
    /// The current moment in local time.
    fn now(&self) -> DateTime<Local>;
}

/// System wall clock. This is what `Logger::new` installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    /// Create a clock that always reports `instant`.
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}
