//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "termdom";
const APPLICATION: &str = "dropdown";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
pub const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory holding the log files.
///
/// - Linux: `$XDG_CACHE_HOME/dropdown` or `~/.cache/dropdown`
/// - macOS: `~/Library/Caches/dev.termdom.dropdown`
/// - Windows: `C:\Users\<User>\AppData\Local\termdom\dropdown\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the demo configuration file.
///
/// - Linux: `$XDG_CONFIG_HOME/dropdown/config.toml`
/// - macOS: `~/Library/Application Support/dev.termdom.dropdown/config.toml`
/// - Windows: `C:\Users\<User>\AppData\Roaming\termdom\dropdown\config\config.toml`
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive `latest.log` under a timestamped name and drop the oldest
/// archives beyond [`MAX_OLD_LOGS`].
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache, MAX_OLD_LOGS);
    }
}

fn rotate_logs_in(dir: &Path, keep: usize) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S%.3f");
        let archived = dir.join(format!("{}.log", timestamp));
        let _ = fs::rename(&latest, &archived);
    }
    prune_logs(dir, keep);
}

fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first; archive names sort by timestamp.
    logs.sort_by_key(|e| e.file_name());

    let excess = logs.len().saturating_sub(keep);
    for entry in logs.iter().take(excess) {
        if let Err(e) = fs::remove_file(entry.path()) {
            log::warn!("could not remove old log {}: {}", entry.path().display(), e);
        }
    }
}
