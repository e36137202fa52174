//! Integration tests for the find-duplicates pipeline.
//!
//! These run the full scan → hash → compare workflow against real temporary
//! directories, with a stub hash provider standing in for the external
//! video hashing library.

use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;
use video_dedup::core::hasher::StubProvider;
use video_dedup::core::pipeline::{find_duplicates, FindDuplicatesConfig, Phase};

fn create_file(dir: &Path, name: &str) {
    File::create(dir.join(name)).unwrap();
}

fn config(directory: &Path, threshold: f64, recursive: bool) -> FindDuplicatesConfig {
    FindDuplicatesConfig {
        directory: directory.to_path_buf(),
        threshold,
        recursive,
    }
}

/// Three files: file1 and file2 are 97% similar, file3 is dissimilar to both.
fn three_file_fixture() -> (TempDir, StubProvider) {
    let temp = TempDir::new().unwrap();
    for name in ["file1.mp4", "file2.mp4", "file3.mp4"] {
        create_file(temp.path(), name);
    }
    // Differences: file1-file2 = 3 (97%), file1-file3 = 40, file2-file3 = 37.
    let provider = StubProvider::new([
        ("file1.mp4", 0.0),
        ("file2.mp4", 3.0),
        ("file3.mp4", 40.0),
    ]);
    (temp, provider)
}

#[test]
fn finds_exactly_one_pair_at_default_threshold() {
    let (temp, provider) = three_file_fixture();

    let report =
        find_duplicates(&provider, &config(temp.path(), 95.0, false), |_, _, _| {}).unwrap();

    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.comparisons, 3);
    assert_eq!(report.duplicates.len(), 1);

    let pair = &report.duplicates[0];
    assert_eq!(pair.similarity, 97.0);
    assert_eq!(format!("{:.2}", pair.similarity), "97.00");

    let mut names = vec![
        pair.file_a.path.file_name().unwrap().to_os_string(),
        pair.file_b.path.file_name().unwrap().to_os_string(),
    ];
    names.sort();
    assert_eq!(names, vec!["file1.mp4", "file2.mp4"]);
}

#[test]
fn tighter_threshold_finds_nothing() {
    let (temp, provider) = three_file_fixture();

    let report =
        find_duplicates(&provider, &config(temp.path(), 99.9, false), |_, _, _| {}).unwrap();

    assert!(report.duplicates.is_empty());
    // The pairs were still all compared.
    assert_eq!(report.comparisons, 3);
}

#[test]
fn comparison_progress_reaches_the_pair_count_exactly() {
    let temp = TempDir::new().unwrap();
    let names = ["a.mp4", "b.mp4", "c.mp4", "d.mp4", "e.mp4"];
    for name in names {
        create_file(temp.path(), name);
    }
    let provider = StubProvider::new(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, i as f64 * 25.0)),
    );

    let mut compare_ticks = 0;
    let mut last_completed = 0;
    find_duplicates(&provider, &config(temp.path(), 95.0, false), |phase, completed, total| {
        if phase == Phase::Comparing && completed > 0 {
            compare_ticks += 1;
            last_completed = completed;
            assert_eq!(total, 10);
        }
    })
    .unwrap();

    // 5 files -> C(5,2) = 10 comparisons, one progress tick each.
    assert_eq!(compare_ticks, 10);
    assert_eq!(last_completed, 10);
}

#[test]
fn recursive_flag_controls_subdirectory_scope() {
    let temp = TempDir::new().unwrap();
    let subdir = temp.path().join("nested");
    fs::create_dir(&subdir).unwrap();
    create_file(temp.path(), "root.mp4");
    create_file(&subdir, "nested.mp4");

    let provider = StubProvider::new([("root.mp4", 0.0), ("nested.mp4", 1.0)]);

    let flat =
        find_duplicates(&provider, &config(temp.path(), 95.0, false), |_, _, _| {}).unwrap();
    assert_eq!(flat.files_scanned, 1);
    assert!(flat.duplicates.is_empty());

    let deep = find_duplicates(&provider, &config(temp.path(), 95.0, true), |_, _, _| {}).unwrap();
    assert_eq!(deep.files_scanned, 2);
    assert_eq!(deep.duplicates.len(), 1);
    assert_eq!(deep.duplicates[0].similarity, 99.0);
}

#[test]
fn only_video_extensions_are_considered() {
    let temp = TempDir::new().unwrap();
    create_file(temp.path(), "a.mp4");
    create_file(temp.path(), "b.MKV");
    create_file(temp.path(), "notes.txt");

    // The text file has no registered hash; if it were scanned the run would
    // abort with a hashing error.
    let provider = StubProvider::new([("a.mp4", 0.0), ("b.MKV", 1.0)]);

    let report =
        find_duplicates(&provider, &config(temp.path(), 95.0, false), |_, _, _| {}).unwrap();

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.duplicates.len(), 1);
}
