//! # vid-dedup CLI
//!
//! Command-line interface for the video duplicate finder.
//!
//! ## Usage
//! ```bash
//! vid-dedup compute clip.mp4
//! vid-dedup compare a.mp4 b.mp4
//! vid-dedup find-duplicates ~/Videos --threshold 95 --recursive
//! ```

mod cli;

use video_dedup::Result;

fn main() -> Result<()> {
    cli::run()
}
