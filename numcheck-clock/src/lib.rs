//! Clock abstraction for numcheck.
//!
//! Audit records carry the time a number was screened. The clock is injected
//! so tests can pin that time instead of reading the system clock.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix timestamp.
pub trait Clock: Send + Sync {
    /// Returns the current time as Unix seconds since epoch.
    fn now_unix_sec(&self) -> i64;
}

/// Wall clock backed by [`SystemTime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_sec(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as i64,
            // Clock set before 1970: report it as a negative offset.
            Err(e) => -(e.duration().as_secs() as i64),
        }
    }
}

/// Clock frozen at a fixed timestamp.
#[derive(Debug, Clone, Copy)]
pub struct MockClock {
    timestamp: i64,
}

impl MockClock {
    pub fn new(timestamp: i64) -> Self {
        Self { timestamp }
    }
}

impl Clock for MockClock {
    fn now_unix_sec(&self) -> i64 {
        self.timestamp
    }
}
