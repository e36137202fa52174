//! Directory walking implementation using walkdir.

use super::{filter::VideoFilter, VideoFile};
use crate::error::ScanError;
use std::path::Path;
use walkdir::WalkDir;

/// Configuration for the directory scanner
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanConfig {
    /// Descend into subdirectories (root level only when false)
    pub recursive: bool,
}

/// Scanner implementation using the walkdir crate
pub struct WalkDirScanner {
    config: ScanConfig,
    filter: VideoFilter,
}

impl WalkDirScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            filter: VideoFilter::new(),
        }
    }

    /// Enumerate video files under `root`.
    ///
    /// Any traversal failure aborts the scan; there are no partial results.
    pub fn scan(&self, root: &Path) -> Result<Vec<VideoFile>, ScanError> {
        if !root.exists() {
            return Err(ScanError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut walker = WalkDir::new(root);
        if !self.config.recursive {
            walker = walker.max_depth(1);
        }

        let mut videos = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| ScanError::Walk {
                path: root.to_path_buf(),
                source: e,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if !self.filter.should_include(entry.path()) {
                continue;
            }

            let size = entry
                .metadata()
                .map_err(|e| ScanError::Walk {
                    path: root.to_path_buf(),
                    source: e,
                })?
                .len();

            videos.push(VideoFile::new(entry.into_path(), size));
        }

        Ok(videos)
    }
}
