//! numcheck: caller-number screening.
//!
//! Decides whether an incoming caller ID is known by prefix-matching it
//! against an operator-maintained allow-list, appends the decision to an
//! audit log, and reports the verdict through a one-character stdout protocol.

pub mod cli;
pub mod commands;
pub mod config;
pub mod exit;
pub mod io;
pub mod logger;
pub mod screener;
pub mod verdict;

pub use cli::{parse_from, Cli, CliError};
pub use commands::{execute, execute_check, CheckOutcome, CommandError, CommandResult, Invocation};
pub use config::{ScreenConfig, TimestampZone, DEFAULT_LOG_FILE, DEFAULT_NUMBERS_FILE};
pub use io::{AllowList, AllowListEntry, AuditLog, AuditRecord, NumberStore, StoreError};
pub use screener::{screen, ScreeningResult};
pub use verdict::{emit, Verdict};
