//! # Pipeline Module
//!
//! Orchestrates the find-duplicates workflow.
//!
//! ## Stages
//! 1. **Scan** - Enumerate video files in the target directory
//! 2. **Hash** - Compute one perceptual hash per file, sequentially
//! 3. **Compare** - All-pairs comparison against the threshold
//!
//! Hashing is strictly sequential: each call blocks until the external
//! library finishes decoding. The per-file hash computations are independent,
//! so a bounded worker pool would be a valid future enhancement, but the
//! comparison enumeration (each unordered pair exactly once, i < j) must stay
//! as-is.

use crate::core::comparator::{find_duplicate_pairs, total_comparisons, DuplicatePair};
use crate::core::hasher::HashProvider;
use crate::core::scanner::{ScanConfig, WalkDirScanner};
use crate::error::Result;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Configuration for one find-duplicates run
#[derive(Debug, Clone)]
pub struct FindDuplicatesConfig {
    /// Directory to search
    pub directory: PathBuf,
    /// Minimum similarity percentage for a pair to count as duplicates
    pub threshold: f64,
    /// Search subdirectories too
    pub recursive: bool,
}

/// Pipeline stage currently reporting progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hashing,
    Comparing,
}

/// Result of a find-duplicates run
#[derive(Debug)]
pub struct ScanReport {
    /// Duplicate pairs, in comparison enumeration order
    pub duplicates: Vec<DuplicatePair>,
    /// Number of video files found and hashed
    pub files_scanned: usize,
    /// Combined size of the scanned files, for the summary line
    pub bytes_scanned: u64,
    /// Number of pairwise comparisons performed
    pub comparisons: usize,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

/// Run the full scan → hash → compare workflow.
///
/// `on_progress` receives `(phase, completed, total)`; during the hashing
/// phase it advances once per file, during the comparing phase once per
/// pairwise comparison. Any scan or hash failure aborts the run with no
/// partial results.
pub fn find_duplicates<P, F>(
    provider: &P,
    config: &FindDuplicatesConfig,
    mut on_progress: F,
) -> Result<ScanReport>
where
    P: HashProvider,
    F: FnMut(Phase, usize, usize),
{
    let start = Instant::now();

    let scanner = WalkDirScanner::new(ScanConfig {
        recursive: config.recursive,
    });
    let files = scanner.scan(&config.directory)?;
    let total_files = files.len();

    info!("Computing video hashes...");
    on_progress(Phase::Hashing, 0, total_files);

    let mut entries = Vec::with_capacity(total_files);
    for (completed, file) in files.into_iter().enumerate() {
        info!("Computing hash for {}", file.path.display());
        let hash = provider.compute_hash(&file.path)?;
        entries.push((file, hash));
        on_progress(Phase::Hashing, completed + 1, total_files);
    }

    info!("Comparing video files...");
    let expected_comparisons = total_comparisons(entries.len());
    on_progress(Phase::Comparing, 0, expected_comparisons);

    let mut comparisons = 0;
    let duplicates = find_duplicate_pairs(&entries, config.threshold, |completed| {
        comparisons = completed;
        on_progress(Phase::Comparing, completed, expected_comparisons);
    });

    Ok(ScanReport {
        duplicates,
        files_scanned: total_files,
        bytes_scanned: entries.iter().map(|(f, _)| f.size).sum(),
        comparisons,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}
