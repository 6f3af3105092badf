use std::fs;
use std::path::{Path, PathBuf};

use assign_tui::paths;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("assign-tui-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn log_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_rotate_archives_latest() {
    let dir = scratch_dir("rotate");
    fs::write(dir.join("latest.log"), "previous run").unwrap();

    paths::rotate_logs_in(&dir, "20260101_120000");

    assert_eq!(log_names(&dir), vec!["20260101_120000.log"]);
    let archived = fs::read_to_string(dir.join("20260101_120000.log")).unwrap();
    assert_eq!(archived, "previous run");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_rotate_prunes_oldest() {
    let dir = scratch_dir("prune");
    for day in 1..=12 {
        fs::write(dir.join(format!("202601{:02}_000000.log", day)), "").unwrap();
    }
    fs::write(dir.join("notes.txt"), "").unwrap();

    paths::rotate_logs_in(&dir, "20260201_000000");

    let names = log_names(&dir);
    assert_eq!(names.len(), 11);
    assert!(!names.contains(&"20260101_000000.log".to_string()));
    assert!(!names.contains(&"20260102_000000.log".to_string()));
    assert!(names.contains(&"20260103_000000.log".to_string()));
    assert!(names.contains(&"notes.txt".to_string()));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_rotate_missing_dir_is_noop() {
    let dir = std::env::temp_dir().join("assign-tui-does-not-exist");
    paths::rotate_logs_in(&dir, "20260101_000000");
    assert!(!dir.exists());
}

#[test]
fn test_create_log_file_makes_directory() {
    let dir = scratch_dir("create");
    let path = dir.join("nested").join("latest.log");

    paths::create_log_file(&path).unwrap();
    assert!(path.is_file());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_create_log_file_reports_errors() {
    let dir = scratch_dir("blocked");
    // A file where the directory should go
    fs::write(dir.join("nested"), "").unwrap();

    assert!(paths::create_log_file(&dir.join("nested").join("latest.log")).is_err());
    fs::remove_dir_all(&dir).unwrap();
}
