//! # CLI Module
//!
//! Command-line interface for the video duplicate finder.
//!
//! ## Usage
//! ```bash
//! # Compute and print one perceptual hash
//! vid-dedup compute clip.mp4
//!
//! # Compare two videos
//! vid-dedup compare a.mp4 b.mp4
//!
//! # Find duplicates in a directory
//! vid-dedup find-duplicates ~/Videos --threshold 95 --recursive
//!
//! # JSON output for scripting
//! vid-dedup find-duplicates ~/Videos --output json
//! ```
//!
//! Running without a subcommand is a usage error: clap prints help and exits
//! non-zero.

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;
use video_dedup::core::hasher::{HashProvider, PerceptualHash, VidDupProvider};
use video_dedup::core::pipeline::{self, FindDuplicatesConfig, Phase, ScanReport};
use video_dedup::{LogConfig, Result};

/// Video duplicate finder - perceptual hashing for video files
#[derive(Parser, Debug)]
#[command(name = "vid-dedup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (traces every pairwise comparison)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the perceptual hash of one video
    Compute {
        /// Path to the video file
        file: PathBuf,
    },
    /// Compare two videos and report their similarity
    Compare {
        /// Path to the first video file
        file1: PathBuf,
        /// Path to the second video file
        file2: PathBuf,
    },
    /// Find duplicate videos in a directory
    FindDuplicates {
        /// Directory containing video files
        directory: PathBuf,

        /// Similarity threshold (percent) for considering videos duplicates
        #[arg(long, default_value_t = 95.0)]
        threshold: f64,

        /// Search subdirectories recursively
        #[arg(long)]
        recursive: bool,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable log lines with a styled summary
    Pretty,
    /// JSON on stdout for scripting
    Json,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    video_dedup::init_tracing(LogConfig {
        verbose: cli.verbose,
    });

    let provider = VidDupProvider::new();

    match cli.command {
        Commands::Compute { file } => run_compute(&provider, &file),
        Commands::Compare { file1, file2 } => run_compare(&provider, &file1, &file2),
        Commands::FindDuplicates {
            directory,
            threshold,
            recursive,
            output,
        } => run_find_duplicates(
            &provider,
            FindDuplicatesConfig {
                directory,
                threshold,
                recursive,
            },
            output,
        ),
    }
}

fn run_compute<P: HashProvider>(provider: &P, file: &PathBuf) -> Result<()> {
    let hash = provider.compute_hash(file)?;
    info!("VideoHash: {}", hash.render());
    Ok(())
}

fn run_compare<P: HashProvider>(provider: &P, file1: &PathBuf, file2: &PathBuf) -> Result<()> {
    let hash1 = provider.compute_hash(file1)?;
    let hash2 = provider.compute_hash(file2)?;

    info!("Comparing {} and {}", file1.display(), file2.display());
    info!("{}", format_similarity(hash1.similarity(&hash2)));
    Ok(())
}

fn run_find_duplicates<P: HashProvider>(
    provider: &P,
    config: FindDuplicatesConfig,
    output: OutputFormat,
) -> Result<()> {
    let show_bars = output == OutputFormat::Pretty;
    let mut bar: Option<(Phase, ProgressBar)> = None;

    let report = pipeline::find_duplicates(provider, &config, |phase, completed, total| {
        if !show_bars {
            return;
        }
        if bar.as_ref().map(|(p, _)| *p) != Some(phase) {
            if let Some((_, pb)) = bar.take() {
                pb.finish_and_clear();
            }
            bar = Some((phase, progress_bar(phase, total)));
        }
        if let Some((_, pb)) = &bar {
            pb.set_position(completed as u64);
        }
    })?;

    if let Some((_, pb)) = bar.take() {
        pb.finish_and_clear();
    }

    match output {
        OutputFormat::Pretty => print_pretty_results(&Term::stderr(), &report),
        OutputFormat::Json => print_json_results(&report),
    }

    Ok(())
}

fn progress_bar(phase: Phase, total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message(match phase {
        Phase::Hashing => "Hashing",
        Phase::Comparing => "Comparing",
    });
    pb
}

fn print_pretty_results(term: &Term, report: &ScanReport) {
    if report.duplicates.is_empty() {
        info!("No duplicates found.");
    } else {
        info!("Duplicates found:");
        for pair in &report.duplicates {
            info!(
                "{} and {} have a similarity of {:.2} %",
                pair.file_a.path.display(),
                pair.file_b.path.display(),
                pair.similarity
            );
        }
    }

    term.write_line("").ok();
    term.write_line(&format!("{} Scan Complete", style("✓").green().bold()))
        .ok();
    term.write_line(&format!(
        "  {} videos hashed ({}) in {:.1}s",
        style(report.files_scanned).cyan(),
        format_bytes(report.bytes_scanned),
        report.duration_ms as f64 / 1000.0
    ))
    .ok();
    term.write_line(&format!(
        "  {} comparisons, {} duplicate pairs",
        style(report.comparisons).cyan(),
        style(report.duplicates.len()).yellow()
    ))
    .ok();
}

fn print_json_results(report: &ScanReport) {
    let output = serde_json::json!({
        "files_scanned": report.files_scanned,
        "bytes_scanned": report.bytes_scanned,
        "comparisons": report.comparisons,
        "duration_ms": report.duration_ms,
        "duplicates": report.duplicates.iter().map(|p| {
            serde_json::json!({
                "file_a": p.file_a.path,
                "file_b": p.file_b.path,
                "similarity": p.similarity,
            })
        }).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn format_similarity(similarity: f64) -> String {
    format!("Similarity: {similarity:.2} %")
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} bytes")
    }
}
