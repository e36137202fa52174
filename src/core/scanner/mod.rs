//! # Scanner Module
//!
//! Discovers video files in directories.
//!
//! ## Supported Extensions
//! `.mp4`, `.avi`, `.mkv`, `.mov`, `.flv`, `.wmv` (case-insensitive)
//!
//! Traversal order is whatever `walkdir` yields; callers must not rely on it.

mod filter;
mod walker;

pub use filter::VideoFilter;
pub use walker::{ScanConfig, WalkDirScanner};

use serde::Serialize;
use std::path::PathBuf;

/// A discovered video file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoFile {
    /// Path to the video file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl VideoFile {
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}
