//! # Error Module
//!
//! Error types for the video duplicate finder.
//!
//! Every error carries the path it relates to where one exists; nothing here
//! is recovered from. The first failure aborts the invocation.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum VideoDedupError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Hashing error: {0}")]
    Hash(#[from] HashError),
}

/// Errors that occur while enumerating video files
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read directory entry under {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Errors raised by the hash provider when a file cannot be hashed
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Failed to hash video {path}: {reason}")]
    CreationFailed { path: PathBuf, reason: String },

    #[error("No hash registered for {path}")]
    UnknownFile { path: PathBuf },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, VideoDedupError>;
