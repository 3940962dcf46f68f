//! CLI argument parsing for numcheck.
//!
//! `numcheck [OPTIONS] <NUMBER>`. Exactly one number is accepted; anything
//! else is a usage error that still has to honour the verdict protocol, so
//! clap failures are returned as values instead of exiting the process.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use thiserror::Error;

use crate::config::{ScreenConfig, TimestampZone, DEFAULT_LOG_FILE, DEFAULT_NUMBERS_FILE};
use crate::logger::Verbosity;

/// Errors from CLI argument validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("call with one argument (the number to be searched), got {0}")]
    ArgumentCount(usize),

    /// Rendered clap error (missing option value, bad value, ...).
    #[error("{0}")]
    Invalid(String),

    /// `--help` or `--version` output.
    #[error("{0}")]
    Info(String),
}

/// Screen a caller number against the allow-list.
///
/// Prints `1` first if the number is known, anything else otherwise.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "numcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The caller number to be searched.
    ///
    /// Options must come before the number; a leading `-` is part of it.
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    pub numbers: Vec<String>,

    /// Allow-list file (one prefix per line, # starts a comment).
    #[arg(long, env = "NUMCHECK_NUMBERS_FILE", default_value = DEFAULT_NUMBERS_FILE)]
    pub numbers_file: PathBuf,

    /// Audit log file, appended to on every run.
    #[arg(long, env = "NUMCHECK_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Write audit timestamps in UTC instead of local time.
    #[arg(long)]
    pub utc: bool,

    /// Diagnostics on stderr (-v, -vv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The single number to screen.
    pub fn query(&self) -> Result<&str, CliError> {
        match self.numbers.as_slice() {
            [number] => Ok(number.as_str()),
            other => Err(CliError::ArgumentCount(other.len())),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_count(self.verbose)
    }

    pub fn config(&self) -> ScreenConfig {
        ScreenConfig {
            numbers_file: self.numbers_file.clone(),
            log_file: self.log_file.clone(),
            timestamps: if self.utc {
                TimestampZone::Utc
            } else {
                TimestampZone::Local
            },
        }
    }
}

/// Parse CLI arguments from an iterator of strings.
pub fn parse_from<I, T>(iter: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter).map_err(|e| {
        let rendered = e.render().to_string();
        match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => CliError::Info(rendered),
            _ => CliError::Invalid(rendered),
        }
    })
}
