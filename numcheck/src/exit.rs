//! Exit codes for numcheck.
//!
//! The external dialer only reads the first character of stdout; exit codes
//! are for humans and scripts that care why a number was not accepted.

use crate::cli::CliError;
use crate::commands::CommandError;
use crate::io::StoreError;

/// Exit code constants.
pub mod codes {
    /// Definitive verdict (found or not found).
    pub const SUCCESS: u8 = 0;
    /// Wrong number of arguments or invalid options.
    pub const USAGE: u8 = 1;
    /// Allow-list could not be read or created, or stdout failed.
    pub const IO_ERROR: u8 = 2;
    /// Allow-list was missing and has just been created.
    pub const LIST_BOOTSTRAPPED: u8 = 3;
}

/// Map a CommandError to an exit code.
pub fn exit_code(error: &CommandError) -> u8 {
    match error {
        CommandError::InvalidArgument(CliError::Info(_)) => codes::SUCCESS,
        CommandError::InvalidArgument(_) => codes::USAGE,
        CommandError::Store(StoreError::Bootstrapped { .. }) => codes::LIST_BOOTSTRAPPED,
        CommandError::Store(StoreError::Unreadable { .. }) => codes::IO_ERROR,
        CommandError::Store(StoreError::CreateFailed { .. }) => codes::IO_ERROR,
    }
}
