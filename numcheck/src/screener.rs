//! Prefix screening of a caller number against the allow-list.

use crate::io::AllowList;

/// Outcome of screening one number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningResult {
    /// Prefix of the first matching entry.
    pub matched_prefix: Option<String>,
    /// Comment of the first matching entry.
    pub comment: Option<String>,
    pub reason: String,
}

impl ScreeningResult {
    pub fn matched(&self) -> bool {
        self.matched_prefix.is_some()
    }

    fn found(prefix: &str, comment: &str) -> Self {
        Self {
            matched_prefix: Some(prefix.to_string()),
            comment: Some(comment.to_string()),
            reason: format!("found as {prefix}"),
        }
    }

    fn not_found() -> Self {
        Self {
            matched_prefix: None,
            comment: None,
            reason: "not found".to_string(),
        }
    }
}

/// Screen `query` against `list`.
///
/// The query matches an entry when it starts with the entry's prefix. Entries
/// are tried in file order and the first match wins. No normalization is
/// applied to either side.
pub fn screen(query: &str, list: &AllowList) -> ScreeningResult {
    list.iter()
        .find(|entry| query.starts_with(entry.prefix.as_str()))
        .map(|entry| ScreeningResult::found(&entry.prefix, &entry.comment))
        .unwrap_or_else(ScreeningResult::not_found)
}
