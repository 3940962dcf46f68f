//! File-backed collaborators of a screening run.
//!
//! Provides:
//! - Loading (and bootstrapping) the allow-list file
//! - Appending decisions to the audit log

pub mod audit_log;
pub mod number_store;

pub use audit_log::{AuditError, AuditLog, AuditRecord};
pub use number_store::{
    parse_allow_list, AllowList, AllowListEntry, NumberStore, ParsedAllowList, StoreError,
    BOOTSTRAP_CONTENT,
};
