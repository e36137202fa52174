//! # Video Dedup
//!
//! Compute perceptual hashes of video files and use them to compare or
//! deduplicate videos.
//!
//! ## Architecture
//! The hashing algorithm itself (frame sampling, DCT, distance) lives in the
//! external `vid_dup_finder_lib` crate; this library is the driver around it:
//! - `core` - enumeration, hashing boundary, pairwise comparison, pipeline
//! - `error` - error types
//!
//! The command-line surface lives in the `vid-dedup` binary.

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{Result, VideoDedupError};

/// Process-wide logging configuration.
///
/// Built once by the application entry point and handed to [`init_tracing`],
/// rather than configuring logging as a global side effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConfig {
    /// Emit DEBUG-level output (the per-comparison trace) in addition to INFO.
    pub verbose: bool,
}

/// Initialize tracing for one invocation.
pub fn init_tracing(config: LogConfig) {
    let filter = tracing_subscriber::EnvFilter::new(if config.verbose {
        "debug"
    } else {
        "info"
    });
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
