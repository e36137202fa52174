//! # Comparator Module
//!
//! Finds duplicate pairs by comparing perceptual hashes.
//!
//! ## How It Works
//! Every unordered pair is compared exactly once: index `i` is paired with
//! every `j > i`, so N files cost N·(N−1)/2 comparisons and nothing is
//! compared with itself. The scan is exhaustive and quadratic on purpose —
//! no indexing or bucketing — which is fine at the small N this tool targets.
//!
//! Pairs whose similarity (`100 - difference`) meets or exceeds the threshold
//! are retained, in enumeration order.

use crate::core::hasher::PerceptualHash;
use crate::core::scanner::VideoFile;
use serde::Serialize;
use tracing::debug;

/// Two distinct files whose similarity met the threshold
#[derive(Debug, Clone, Serialize)]
pub struct DuplicatePair {
    /// The first file of the pair (earlier in enumeration order)
    pub file_a: VideoFile,
    /// The second file of the pair
    pub file_b: VideoFile,
    /// Similarity as a percentage
    pub similarity: f64,
}

/// Number of unordered pairs among `n` files
pub fn total_comparisons(n: usize) -> usize {
    n.saturating_sub(1) * n / 2
}

/// Find all duplicate pairs from a collection of hashed files.
///
/// `on_compare` is invoked once per comparison with the running count, so
/// long scans stay observable. The threshold comparison is inclusive.
pub fn find_duplicate_pairs<H, F>(
    entries: &[(VideoFile, H)],
    threshold: f64,
    mut on_compare: F,
) -> Vec<DuplicatePair>
where
    H: PerceptualHash,
    F: FnMut(usize),
{
    let mut duplicates = Vec::new();
    let mut completed = 0;

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (file_a, hash_a) = &entries[i];
            let (file_b, hash_b) = &entries[j];

            debug!(
                "Comparing {} and {}",
                file_a.path.display(),
                file_b.path.display()
            );

            let similarity = hash_a.similarity(hash_b);
            if similarity >= threshold {
                duplicates.push(DuplicatePair {
                    file_a: file_a.clone(),
                    file_b: file_b.clone(),
                    similarity,
                });
            }

            completed += 1;
            on_compare(completed);
        }
    }

    duplicates
}
