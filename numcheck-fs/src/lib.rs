//! Filesystem abstraction for numcheck.
//!
//! This crate provides:
//! - Filesystem trait covering the few operations the screener needs
//! - RealFilesystem backed by `std::fs`
//! - MockFilesystem for tests, with injectable read/write failures

pub mod filesystem;

pub use filesystem::{Filesystem, FsError, MockFilesystem, RealFilesystem};
