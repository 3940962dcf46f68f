//! Check command orchestration.
//!
//! Loads the allow-list, screens the number and appends an audit record.

use numcheck_clock::Clock;
use numcheck_fs::Filesystem;

use crate::config::ScreenConfig;
use crate::io::{AuditLog, AuditRecord, NumberStore};
use crate::logger::Logger;
use crate::screener::{screen, ScreeningResult};

use super::CommandResult;

/// Result of check command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub screening: ScreeningResult,
    /// The audit record written, or `None` if the log could not be appended.
    pub audit: Option<AuditRecord>,
}

/// Execute the check command.
///
/// A load failure short-circuits before screening and nothing is audited.
/// An audit failure is only logged; it never changes the verdict.
pub fn execute_check<F, C, L>(
    query: &str,
    config: &ScreenConfig,
    fs: &F,
    clock: &C,
    logger: &L,
) -> CommandResult<CheckOutcome>
where
    F: Filesystem + Clone,
    C: Clock,
    L: Logger,
{
    let store = NumberStore::new(fs.clone(), config.numbers_file.clone());
    let parsed = store.load()?;

    for line in &parsed.skipped_lines {
        logger.verbose(&format!(
            "{}:{}: no prefix before separator, line ignored",
            store.path().display(),
            line
        ));
    }
    logger.verbose(&format!(
        "loaded {} entries from {}",
        parsed.list.len(),
        store.path().display()
    ));
    for entry in &parsed.list {
        logger.debug(&format!("entry line {}: {:?}", entry.line, entry.prefix));
    }

    let screening = screen(query, &parsed.list);
    logger.verbose(&format!("{query}: {}", screening.reason));

    let audit_log = AuditLog::new(fs.clone(), config.log_file.clone(), config.timestamps);
    let audit = match audit_log.record(clock.now_unix_sec(), query, &screening) {
        Ok(record) => Some(record),
        Err(e) => {
            logger.warn(&e.to_string());
            None
        }
    };

    Ok(CheckOutcome { screening, audit })
}
