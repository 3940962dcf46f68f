//! Command orchestration.
//!
//! Provides:
//! - `execute_check` - load the allow-list, screen one number, audit it
//! - `execute` - full invocation from raw arguments to verdict and exit code

pub mod check;

pub use check::{execute_check, CheckOutcome};

use std::ffi::OsString;

use numcheck_clock::Clock;
use numcheck_fs::Filesystem;
use thiserror::Error;

use crate::cli::{parse_from, CliError};
use crate::exit::{codes, exit_code};
use crate::io::StoreError;
use crate::logger::{Logger, StderrLogger};
use crate::verdict::Verdict;

/// Errors from command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    InvalidArgument(#[from] CliError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of command execution.
pub type CommandResult<T> = Result<T, CommandError>;

/// Everything the binary needs to finish a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub verdict: Verdict,
    pub exit_code: u8,
}

/// Run one invocation. Never fails: every error becomes a `0` verdict.
pub fn execute<I, T, F, C>(args: I, fs: &F, clock: &C) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: Filesystem + Clone,
    C: Clock,
{
    let cli = match parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return failed(&CommandError::from(e)),
    };
    let logger = StderrLogger::new(cli.verbosity());

    let result = cli
        .query()
        .map_err(CommandError::from)
        .and_then(|query| execute_check(query, &cli.config(), fs, clock, &logger));

    match result {
        Ok(outcome) => Invocation {
            verdict: Verdict::from_screening(&outcome.screening),
            exit_code: codes::SUCCESS,
        },
        Err(e) => {
            logger.verbose(&format!("error: {e}"));
            failed(&e)
        }
    }
}

fn failed(error: &CommandError) -> Invocation {
    Invocation {
        verdict: Verdict::from_error(error),
        exit_code: exit_code(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::BOOTSTRAP_CONTENT;
    use numcheck_clock::MockClock;
    use numcheck_fs::MockFilesystem;
    use std::path::{Path, PathBuf};

    const NUMBERS: &str = "/srv/numbers.txt";
    const LOG: &str = "/srv/numcheck.log";

    fn run(fs: &MockFilesystem, number: &[&str]) -> Invocation {
        let mut args = vec![
            "numcheck",
            "--numbers-file",
            NUMBERS,
            "--log-file",
            LOG,
            "--utc",
        ];
        args.extend_from_slice(number);
        execute(args, fs, &MockClock::new(1_704_067_200))
    }

    fn with_numbers(content: &str) -> MockFilesystem {
        let fs = MockFilesystem::new();
        fs.add_file(PathBuf::from(NUMBERS), content);
        fs
    }

    #[test]
    fn test_execute_found() {
        let fs = with_numbers("080012345678 # your test number\n");
        let inv = run(&fs, &["080012345678999"]);

        assert_eq!(inv.exit_code, codes::SUCCESS);
        assert!(inv.verdict.render().starts_with('1'));
        assert_eq!(
            fs.get_text(Path::new(LOG)).as_deref(),
            Some("# 2024-01-01 00:00:00 080012345678999 found as 080012345678\n")
        );
    }

    #[test]
    fn test_execute_not_found() {
        let fs = with_numbers("080012345678 # your test number\n");
        let inv = run(&fs, &["0800123"]);

        assert_eq!(inv.exit_code, codes::SUCCESS);
        assert_eq!(inv.verdict.render(), "0\nNumber not found!\n");
        assert_eq!(
            fs.get_text(Path::new(LOG)).as_deref(),
            Some("# 2024-01-01 00:00:00 0800123 not found.\n")
        );
    }

    #[test]
    fn test_execute_usage_error() {
        let fs = with_numbers("0800\n");
        let inv = run(&fs, &[]);

        assert_eq!(inv.exit_code, codes::USAGE);
        assert!(inv.verdict.render().starts_with('0'));
        assert!(fs.get_file(Path::new(LOG)).is_none());
    }

    #[test]
    fn test_execute_too_many_numbers() {
        let fs = with_numbers("0800\n");
        let inv = run(&fs, &["0800", "0171"]);

        assert_eq!(inv.exit_code, codes::USAGE);
        assert!(inv.verdict.detail().contains("got 2"));
    }

    #[test]
    fn test_execute_unknown_option() {
        let fs = with_numbers("0800\n");
        let inv = execute(["numcheck", "--nope", "0800"], &fs, &MockClock::new(0));

        assert_eq!(inv.exit_code, codes::USAGE);
        assert!(!inv.verdict.known());
    }

    #[test]
    fn test_execute_bootstraps_missing_list() {
        let fs = MockFilesystem::new();
        let inv = run(&fs, &["080012345678"]);

        assert_eq!(inv.exit_code, codes::LIST_BOOTSTRAPPED);
        assert!(inv.verdict.render().starts_with('0'));
        assert!(inv.verdict.detail().contains("created it for you"));
        assert_eq!(fs.get_text(Path::new(NUMBERS)).as_deref(), Some(BOOTSTRAP_CONTENT));
        assert!(fs.get_file(Path::new(LOG)).is_none());
    }

    #[test]
    fn test_execute_unreadable_list() {
        let fs = with_numbers("0800\n");
        fs.deny_read(PathBuf::from(NUMBERS));
        let inv = run(&fs, &["0800"]);

        assert_eq!(inv.exit_code, codes::IO_ERROR);
        assert!(inv.verdict.render().starts_with('0'));
        assert!(inv.verdict.detail().contains("error reading file"));
    }

    #[test]
    fn test_execute_log_failure_keeps_verdict() {
        let fs = with_numbers("0800\n");
        fs.deny_write(PathBuf::from(LOG));
        let inv = run(&fs, &["08001234"]);

        assert_eq!(inv.exit_code, codes::SUCCESS);
        assert!(inv.verdict.known());
    }
}
