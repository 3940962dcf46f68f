//! Runtime configuration for a screening run.
//!
//! Built once from the command line and handed to the store and the audit
//! log, so tests can point both at isolated files.

use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Default allow-list file, relative to the working directory.
pub const DEFAULT_NUMBERS_FILE: &str = "numbers.txt";

/// Default audit log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "numcheck.log";

/// Time zone used to render audit timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampZone {
    #[default]
    Local,
    Utc,
}

impl TimestampZone {
    /// Convert Unix seconds to wall-clock time in this zone.
    /// Out-of-range timestamps fall back to the epoch.
    pub fn wall_time(self, unix_sec: i64) -> NaiveDateTime {
        let utc = DateTime::<Utc>::from_timestamp(unix_sec, 0).unwrap_or_default();
        match self {
            TimestampZone::Utc => utc.naive_utc(),
            TimestampZone::Local => utc.with_timezone(&Local).naive_local(),
        }
    }
}

/// Files and formatting options for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    pub numbers_file: PathBuf,
    pub log_file: PathBuf,
    pub timestamps: TimestampZone,
}
