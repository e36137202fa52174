//! # Core Module
//!
//! The UI-agnostic duplicate detection engine.
//!
//! ## Modules
//! - `scanner` - Discovers video files in directories
//! - `hasher` - The perceptual hash boundary (external library behind a trait)
//! - `comparator` - Finds duplicate pairs by comparing hashes
//! - `pipeline` - Orchestrates the full find-duplicates workflow

pub mod comparator;
pub mod hasher;
pub mod pipeline;
pub mod scanner;

// Re-export commonly used types
pub use comparator::DuplicatePair;
pub use hasher::{HashProvider, PerceptualHash};
pub use scanner::VideoFile;
