//! Production hash provider backed by `vid_dup_finder_lib`.
//!
//! The library shells out to ffmpeg to decode and sample frames, so ffmpeg
//! and ffprobe must be on the PATH at runtime. A stuck decode blocks the
//! invocation; no timeout is applied at this layer.

use super::{HashProvider, PerceptualHash};
use crate::error::HashError;
use std::path::Path;
use vid_dup_finder_lib::VideoHash;

/// Perceptual hash of one video file, as produced by `vid_dup_finder_lib`
#[derive(Debug, Clone)]
pub struct VidDupHash(VideoHash);

impl PerceptualHash for VidDupHash {
    fn difference(&self, other: &Self) -> f64 {
        // The library reports a normalized distance in [0, 1]; scale it to
        // the [0, 100] convention used for thresholds and reporting.
        self.0.normalized_levenshtein_distance(&other.0).value() * 100.0
    }

    fn render(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "<unrenderable hash>".to_string())
    }
}

/// Hash provider that delegates to the external perceptual hashing library
#[derive(Debug, Clone, Copy, Default)]
pub struct VidDupProvider;

impl VidDupProvider {
    pub fn new() -> Self {
        Self
    }
}

impl HashProvider for VidDupProvider {
    type Hash = VidDupHash;

    fn compute_hash(&self, path: &Path) -> Result<Self::Hash, HashError> {
        VideoHash::from_path(path)
            .map(VidDupHash)
            .map_err(|e| HashError::CreationFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}
