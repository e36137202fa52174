//! File filtering logic for the scanner.

use std::collections::HashSet;
use std::path::Path;

/// Filters files to those with a recognized video extension
pub struct VideoFilter {
    extensions: HashSet<String>,
}

impl VideoFilter {
    /// Create a filter with the default video extensions
    pub fn new() -> Self {
        Self {
            extensions: ["mp4", "avi", "mkv", "mov", "flv", "wmv"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Check if a file should be included (extension match, case-insensitive)
    pub fn should_include(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.extensions.contains(&ext.to_lowercase()),
            None => false,
        }
    }
}

impl Default for VideoFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_includes_known_extensions() {
        let filter = VideoFilter::new();
        assert!(filter.should_include(Path::new("/videos/clip.mp4")));
        assert!(filter.should_include(Path::new("/videos/clip.mkv")));
        assert!(filter.should_include(Path::new("/videos/clip.wmv")));
    }

    #[test]
    fn filter_is_case_insensitive() {
        let filter = VideoFilter::new();
        assert!(filter.should_include(Path::new("/videos/A.MP4")));
        assert!(filter.should_include(Path::new("/videos/clip.Mov")));
    }

    #[test]
    fn filter_excludes_non_videos() {
        let filter = VideoFilter::new();
        assert!(!filter.should_include(Path::new("/videos/notes.txt")));
        assert!(!filter.should_include(Path::new("/videos/photo.jpg")));
    }

    #[test]
    fn filter_handles_no_extension() {
        let filter = VideoFilter::new();
        assert!(!filter.should_include(Path::new("/videos/no_extension")));
    }
}
