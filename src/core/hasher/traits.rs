//! Trait definitions for the perceptual hash boundary.

use crate::error::HashError;
use std::path::Path;

/// A computed perceptual hash that can be compared
pub trait PerceptualHash: Clone + Send + Sync {
    /// Distance to another hash.
    ///
    /// Pure, commutative, non-negative. The provider defines the scale; the
    /// production provider keeps it within [0, 100].
    fn difference(&self, other: &Self) -> f64;

    /// Similarity as a percentage, `100 - difference`.
    ///
    /// Not clamped: an out-of-range difference from a misbehaving provider
    /// shows up in the output rather than being masked here.
    fn similarity(&self, other: &Self) -> f64 {
        100.0 - self.difference(other)
    }

    /// Textual form of the hash, for `compute` mode output
    fn render(&self) -> String;
}

/// Capability to produce a perceptual hash for a video file.
///
/// `compute_hash` is deterministic for a given file's content, may be
/// expensive (it decodes and samples video frames), and fails if the file
/// cannot be read or decoded as video. Failure is fatal to the invocation;
/// nothing retries.
pub trait HashProvider: Send + Sync {
    type Hash: PerceptualHash;

    fn compute_hash(&self, path: &Path) -> Result<Self::Hash, HashError>;
}
