//! Platform-specific locations for the log file.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "assign";
const APPLICATION: &str = "assign-tui";

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept besides `latest.log`.
const MAX_OLD_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Cache directory for regenerable data such as logs.
///
/// - Linux: `$XDG_CACHE_HOME/assign-tui` or `~/.cache/assign-tui`
/// - macOS: `~/Library/Caches/dev.assign.assign-tui`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log for the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Create (or truncate) the log file at `path`, creating its directory.
pub fn create_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    File::create(path)
}

/// Archive `latest.log` under a timestamp and prune old archives.
///
/// Call at startup, before the new log file is created.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache, &chrono::Local::now().format("%Y%m%d_%H%M%S").to_string());
}

/// Rotation against an explicit directory and timestamp.
pub fn rotate_logs_in(dir: &Path, timestamp: &str) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let _ = fs::rename(&latest, dir.join(format!("{}.log", timestamp)));
    }
    prune_old_logs(dir, MAX_OLD_LOGS);
}

/// Remove archived logs beyond the `keep` most recent ones.
fn prune_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    // Timestamped names sort chronologically.
    let mut archived: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension().is_some_and(|ext| ext == "log")
                && p.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .collect();
    archived.sort();

    let excess = archived.len().saturating_sub(keep);
    for path in archived.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}
