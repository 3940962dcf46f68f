//! Filesystem operations used by the allow-list store and the audit log.
//!
//! Every file handle is scoped to a single call, so it is closed on all exit
//! paths including errors.

use std::collections::{HashMap, HashSet};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use thiserror::Error;

/// Errors from filesystem operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl FsError {
    /// True if the failure was caused by the target already existing.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, FsError::Io(e) if e.kind() == io::ErrorKind::AlreadyExists)
    }
}

/// Trait for filesystem operations.
/// Abstracted for testing with mock implementations.
pub trait Filesystem: Send + Sync {
    /// Read file contents as text. Invalid UTF-8 is replaced, not rejected.
    fn read_file(&self, path: &Path) -> Result<String, FsError>;

    /// Check if something exists at `path`, without following a final symlink.
    /// Fails when that cannot be determined, e.g. an unsearchable parent.
    fn exists(&self, path: &Path) -> Result<bool, FsError>;

    /// Create a new file with the given contents.
    /// Fails if the file already exists; never truncates.
    fn create_new(&self, path: &Path, data: &[u8]) -> Result<(), FsError>;

    /// Append data to a file, creating it if it doesn't exist.
    fn append(&self, path: &Path, data: &[u8]) -> Result<(), FsError>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFilesystem;

impl Filesystem for RealFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn exists(&self, path: &Path) -> Result<bool, FsError> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn create_new(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
        file.write_all(data)?;
        file.sync_data()?;
        Ok(())
    }

    fn append(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        // No locking: concurrent appenders may interleave.
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(data)?;
        file.sync_data()?;
        Ok(())
    }
}

/// Mock filesystem for testing.
/// Cloning creates a new handle to the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct MockFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
    unreadable: Arc<RwLock<HashSet<PathBuf>>>,
    unstattable: Arc<RwLock<HashSet<PathBuf>>>,
    read_only: Arc<RwLock<HashSet<PathBuf>>>,
}

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get content of a specific file.
    pub fn get_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.read().unwrap().get(path).cloned()
    }

    /// Get content of a specific file as text.
    pub fn get_text(&self, path: &Path) -> Option<String> {
        self.get_file(path)
            .map(|data| String::from_utf8_lossy(&data).into_owned())
    }

    /// Add a file directly (for test setup).
    pub fn add_file(&self, path: PathBuf, data: impl Into<Vec<u8>>) {
        self.files.write().unwrap().insert(path, data.into());
    }

    /// Make reads of `path` fail with permission denied. The path still exists.
    pub fn deny_read(&self, path: PathBuf) {
        self.unreadable.write().unwrap().insert(path);
    }

    /// Make existence checks of `path` fail with permission denied.
    pub fn deny_stat(&self, path: PathBuf) {
        self.unstattable.write().unwrap().insert(path);
    }

    /// Make creates and appends to `path` fail with permission denied.
    pub fn deny_write(&self, path: PathBuf) {
        self.read_only.write().unwrap().insert(path);
    }

    fn check_writable(&self, path: &Path) -> Result<(), FsError> {
        if self.read_only.read().unwrap().contains(path) {
            return Err(permission_denied(path));
        }
        Ok(())
    }
}

fn permission_denied(path: &Path) -> FsError {
    FsError::Io(io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("permission denied: {}", path.display()),
    ))
}

impl Filesystem for MockFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, FsError> {
        if self.unreadable.read().unwrap().contains(path) {
            return Err(permission_denied(path));
        }
        match self.files.read().unwrap().get(path) {
            Some(data) => Ok(String::from_utf8_lossy(data).into_owned()),
            None => Err(FsError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            ))),
        }
    }

    fn exists(&self, path: &Path) -> Result<bool, FsError> {
        if self.unstattable.read().unwrap().contains(path) {
            return Err(permission_denied(path));
        }
        Ok(self.files.read().unwrap().contains_key(path)
            || self.unreadable.read().unwrap().contains(path))
    }

    fn create_new(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        self.check_writable(path)?;
        let mut files = self.files.write().unwrap();
        if files.contains_key(path) {
            return Err(FsError::Io(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("file exists: {}", path.display()),
            )));
        }
        files.insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }

    fn append(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        self.check_writable(path)?;
        let mut files = self.files.write().unwrap();
        files
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(data);
        Ok(())
    }
}
