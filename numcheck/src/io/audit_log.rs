//! Append-only audit log of screening decisions.
//!
//! One plain-text line per invocation:
//! `# YYYY-MM-DD HH:MM:SS <query> found as <prefix>` or
//! `# YYYY-MM-DD HH:MM:SS <query> not found.`

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use numcheck_fs::{Filesystem, FsError};
use thiserror::Error;

use crate::config::TimestampZone;
use crate::screener::ScreeningResult;

/// Errors from audit logging.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to append to audit log {}: {source}", .path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}

/// A single audit line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub timestamp: NaiveDateTime,
    pub query: String,
    pub matched_prefix: Option<String>,
}

impl AuditRecord {
    pub fn new(timestamp: NaiveDateTime, query: &str, result: &ScreeningResult) -> Self {
        Self {
            timestamp,
            query: query.to_string(),
            matched_prefix: result.matched_prefix.clone(),
        }
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts = self.timestamp.format("%Y-%m-%d %H:%M:%S");
        match &self.matched_prefix {
            Some(prefix) => write!(f, "# {ts} {} found as {prefix}", self.query),
            None => write!(f, "# {ts} {} not found.", self.query),
        }
    }
}

/// Writer for the audit log file.
pub struct AuditLog<F: Filesystem> {
    fs: F,
    path: PathBuf,
    zone: TimestampZone,
}

impl<F: Filesystem> AuditLog<F> {
    pub fn new(fs: F, path: PathBuf, zone: TimestampZone) -> Self {
        Self { fs, path, zone }
    }

    /// Append one record for a screening decision made at `unix_sec`.
    /// The file is created if it doesn't exist.
    pub fn record(
        &self,
        unix_sec: i64,
        query: &str,
        result: &ScreeningResult,
    ) -> Result<AuditRecord, AuditError> {
        let record = AuditRecord::new(self.zone.wall_time(unix_sec), query, result);
        let line = format!("{record}\n");
        self.fs
            .append(&self.path, line.as_bytes())
            .map_err(|source| AuditError::Append {
                path: self.path.clone(),
                source,
            })?;
        Ok(record)
    }
}
