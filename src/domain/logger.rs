//! Debug logging to a daily-rotated file.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_PREFIX: &str = "commit-helper";

/// Rotated files older than this are removed when logging starts.
const RETENTION: Duration = Duration::from_secs(2 * 24 * 60 * 60);

/// Directory that receives debug logs: `~/.config/commit-helper/logs`.
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join(LOG_PREFIX)
        .join("logs")
}

/// Install a DEBUG-level subscriber writing to `log_dir`.
pub fn init(log_dir: &Path) -> Result<()> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    let removed = cleanup_old_logs(log_dir, SystemTime::now())?;

    let timer = OffsetTime::new(
        time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    );
    let file_layer = fmt::layer()
        .with_writer(RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_PREFIX))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(timer);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with(file_layer)
        .try_init()
        .context("Failed to set global subscriber")?;

    tracing::debug!(dir = %log_dir.display(), removed, "Debug logging enabled");
    Ok(())
}

/// Delete this crate's log files last modified before `now - RETENTION`.
/// Returns how many files were removed.
pub fn cleanup_old_logs(log_dir: &Path, now: SystemTime) -> Result<usize> {
    if !log_dir.exists() {
        return Ok(0);
    }
    let cutoff = now.checked_sub(RETENTION).unwrap_or(SystemTime::UNIX_EPOCH);

    let stale: Vec<PathBuf> = fs::read_dir(log_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(LOG_PREFIX))
        .filter(|entry| {
            entry
                .metadata()
                .ok()
                .filter(|meta| meta.is_file())
                .and_then(|meta| meta.modified().ok())
                .is_some_and(|modified| modified < cutoff)
        })
        .map(|entry| entry.path())
        .collect();

    Ok(stale
        .iter()
        .filter(|path| fs::remove_file(path).is_ok())
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cleanup_keeps_recent_and_foreign_files() {
        let dir = TempDir::new().unwrap();
        let ours = dir.path().join("commit-helper.2026-10-16");
        let foreign = dir.path().join("other.log");
        fs::write(&ours, "recent").unwrap();
        fs::write(&foreign, "not ours").unwrap();

        let removed = cleanup_old_logs(dir.path(), SystemTime::now()).unwrap();

        assert_eq!(removed, 0);
        assert!(ours.exists());
        assert!(foreign.exists());
    }

    #[test]
    fn test_cleanup_removes_only_stale_own_files() {
        let dir = TempDir::new().unwrap();
        let ours = dir.path().join("commit-helper.2026-10-01");
        let foreign = dir.path().join("other.log");
        fs::write(&ours, "old").unwrap();
        fs::write(&foreign, "not ours").unwrap();

        // Three days from now, both files are past retention
        let later = SystemTime::now() + Duration::from_secs(3 * 24 * 60 * 60);
        let removed = cleanup_old_logs(dir.path(), later).unwrap();

        assert_eq!(removed, 1);
        assert!(!ours.exists());
        assert!(foreign.exists());
    }

    #[test]
    fn test_cleanup_missing_dir_is_ok() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            cleanup_old_logs(&dir.path().join("absent"), SystemTime::now()).unwrap(),
            0
        );
    }

    #[test]
    fn test_default_log_dir_is_namespaced() {
        assert!(default_log_dir().ends_with(".config/commit-helper/logs"));
    }
}
