//! Allow-list file loading and first-run bootstrap.
//!
//! Format:
//! - One entry per line: `<prefix>[ #<comment>]`
//! - Lines starting with # are comments
//! - Empty lines are ignored
//! - Entry order is significant: the first matching prefix wins

use std::path::{Path, PathBuf};

use numcheck_fs::{Filesystem, FsError};
use thiserror::Error;

/// Content written when the allow-list file does not exist yet.
pub const BOOTSTRAP_CONTENT: &str = "# Numbers file for numcheck\n\
# one number per line, # makes a comment\n\
080012345678 # your test number\n";

/// Errors from loading the allow-list.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file {} does not exist, created it for you", .path.display())]
    Bootstrapped { path: PathBuf },

    #[error("error reading file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("could not create file {}: {source}", .path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}

/// One parsed line of the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowListEntry {
    pub prefix: String,
    pub comment: String,
    /// 1-based line number in the source file.
    pub line: usize,
}

/// Allow-list entries in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: Vec<AllowListEntry>,
}

impl AllowList {
    pub fn entries(&self) -> &[AllowListEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AllowListEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AllowList {
    type Item = &'a AllowListEntry;
    type IntoIter = std::slice::Iter<'a, AllowListEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Result of parsing allow-list content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAllowList {
    pub list: AllowList,
    /// Lines that looked like entries but had no prefix.
    pub skipped_lines: Vec<usize>,
}

/// Parse allow-list content.
///
/// A line starting with `#` or empty is a comment. Otherwise `#` acts as a
/// separator: the text before the first space or `#` is the prefix, the rest
/// is the comment. Lines whose prefix is empty are skipped, since an empty
/// prefix would match every query.
pub fn parse_allow_list(content: &str) -> ParsedAllowList {
    let mut parsed = ParsedAllowList::default();

    for (idx, raw) in content.lines().enumerate() {
        let line_num = idx + 1;

        if raw.is_empty() || raw.starts_with('#') {
            continue;
        }

        let line = raw.replace(&['#', '\r'][..], " ");
        let (prefix, comment) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        let prefix = prefix.trim();

        if prefix.is_empty() {
            parsed.skipped_lines.push(line_num);
            continue;
        }

        parsed.list.entries.push(AllowListEntry {
            prefix: prefix.to_string(),
            comment: comment.trim().to_string(),
            line: line_num,
        });
    }

    parsed
}

/// The allow-list file on disk.
pub struct NumberStore<F: Filesystem> {
    fs: F,
    path: PathBuf,
}

impl<F: Filesystem> NumberStore<F> {
    pub fn new(fs: F, path: PathBuf) -> Self {
        Self { fs, path }
    }

    /// Get the path to the allow-list file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse the allow-list.
    ///
    /// A missing file is created with [`BOOTSTRAP_CONTENT`] and the load
    /// fails with [`StoreError::Bootstrapped`]: a freshly created list has
    /// nothing worth screening against.
    ///
    /// Only a path that is confirmed absent is bootstrapped. If its existence
    /// cannot be determined the load fails as [`StoreError::Unreadable`].
    pub fn load(&self) -> Result<ParsedAllowList, StoreError> {
        let exists = self.fs.exists(&self.path).map_err(|e| self.unreadable(e))?;
        if !exists {
            self.bootstrap()?;
            return Err(StoreError::Bootstrapped {
                path: self.path.clone(),
            });
        }

        let content = self
            .fs
            .read_file(&self.path)
            .map_err(|e| self.unreadable(e))?;

        Ok(parse_allow_list(&content))
    }

    /// Write the default header to a missing allow-list file.
    ///
    /// Losing a creation race to another invocation counts as success.
    pub fn bootstrap(&self) -> Result<(), StoreError> {
        match self.fs.create_new(&self.path, BOOTSTRAP_CONTENT.as_bytes()) {
            Ok(()) => Ok(()),
            Err(e) if e.is_already_exists() => Ok(()),
            Err(source) => Err(StoreError::CreateFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn unreadable(&self, source: FsError) -> StoreError {
        StoreError::Unreadable {
            path: self.path.clone(),
            source,
        }
    }
}
