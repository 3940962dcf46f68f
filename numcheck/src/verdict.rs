//! Verdict output protocol.
//!
//! The first character on stdout is read by the dialer: `1` means the caller
//! is known, anything else means it is not. [`emit`] is the only code that
//! writes to stdout; everything else logs to stderr.

use std::io::{self, Write};

use crate::commands::CommandError;
use crate::screener::ScreeningResult;

/// Leading character for a known number.
pub const KNOWN: char = '1';

/// Leading character for unknown numbers and every failure.
pub const UNKNOWN: char = '0';

/// What gets printed for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    known: bool,
    detail: String,
}

impl Verdict {
    pub fn from_screening(result: &ScreeningResult) -> Self {
        match (&result.matched_prefix, result.comment.as_deref()) {
            (Some(prefix), Some(comment)) if !comment.is_empty() => Self {
                known: true,
                detail: format!("Number found as {prefix} ({comment})"),
            },
            (Some(prefix), _) => Self {
                known: true,
                detail: format!("Number found as {prefix}"),
            },
            (None, _) => Self {
                known: false,
                detail: "Number not found!".to_string(),
            },
        }
    }

    pub fn from_error(error: &CommandError) -> Self {
        Self {
            known: false,
            detail: error.to_string().trim_end().to_string(),
        }
    }

    pub fn known(&self) -> bool {
        self.known
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn sentinel(&self) -> char {
        if self.known {
            KNOWN
        } else {
            UNKNOWN
        }
    }

    /// Sentinel line followed by the human-readable detail.
    pub fn render(&self) -> String {
        format!("{}\n{}\n", self.sentinel(), self.detail)
    }
}

/// Write the verdict and flush.
pub fn emit<W: Write>(out: &mut W, verdict: &Verdict) -> io::Result<()> {
    out.write_all(verdict.render().as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliError;
    use crate::io::{parse_allow_list, StoreError};
    use crate::screener::screen;
    use std::path::PathBuf;

    fn verdict_for(query: &str, content: &str) -> Verdict {
        Verdict::from_screening(&screen(query, &parse_allow_list(content).list))
    }

    #[test]
    fn test_found_starts_with_one() {
        let verdict = verdict_for("080012345678999", "080012345678 # your test number\n");
        assert!(verdict.known());
        assert_eq!(
            verdict.render(),
            "1\nNumber found as 080012345678 (your test number)\n"
        );
    }

    #[test]
    fn test_found_without_comment() {
        let verdict = verdict_for("08001", "0800\n");
        assert_eq!(verdict.render(), "1\nNumber found as 0800\n");
    }

    #[test]
    fn test_not_found_starts_with_zero() {
        let verdict = verdict_for("0800123", "080012345678 # your test number\n");
        assert_eq!(verdict.render(), "0\nNumber not found!\n");
    }

    #[test]
    fn test_errors_never_start_with_one() {
        let errors = [
            CommandError::InvalidArgument(CliError::ArgumentCount(2)),
            CommandError::InvalidArgument(CliError::Info("1.0.0\n".to_string())),
            CommandError::Store(StoreError::Bootstrapped {
                path: PathBuf::from("numbers.txt"),
            }),
        ];
        for error in &errors {
            let rendered = Verdict::from_error(error).render();
            assert!(rendered.starts_with(UNKNOWN), "{rendered:?}");
        }
    }

    #[test]
    fn test_error_detail_trims_trailing_newline() {
        let verdict = Verdict::from_error(&CommandError::InvalidArgument(CliError::Info(
            "numcheck 0.1.0\n".to_string(),
        )));
        assert_eq!(verdict.render(), "0\nnumcheck 0.1.0\n");
    }

    #[test]
    fn test_emit_writes_sentinel_first() {
        let mut out = Vec::new();
        emit(&mut out, &verdict_for("0800", "0800\n")).expect("emit");
        assert_eq!(out.first(), Some(&b'1'));
    }
}
