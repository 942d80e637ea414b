//! File-backed `tracing` setup.
//!
//! The terminal is owned by the TUI, so log lines never go to stdout or
//! stderr. Without a configured log file no subscriber is installed and all
//! events are discarded.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing::info;

use crate::config::{AppConfig, LogLevel};

/// Installs the global subscriber described by `config`.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init(config: &AppConfig) -> io::Result<()> {
    let Some(log_file) = config.log_file.as_deref() else {
        return Ok(());
    };

    let file = open_log_file(log_file)?;
    tracing::subscriber::set_global_default(file_subscriber(file, config.log_level))
        .map_err(io::Error::other)?;
    info!(path = %log_file.display(), level = %config.log_level, "logging initialized");

    Ok(())
}

/// Builds a plain-text subscriber that appends to `file`.
pub fn file_subscriber(file: File, level: LogLevel) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(level.level_filter())
        .with_ansi(false)
        .with_target(false)
        .finish()
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use tracing::{debug, warn};

    use super::*;

    #[test]
    fn test_open_log_file_creates_missing_parent_directories() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("pieskoapka.log");

        // Act
        let result = open_log_file(&path);

        // Assert
        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_file_subscriber_respects_level() {
        // Arrange
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("pieskoapka.log");
        let file = open_log_file(&path).expect("failed to open log file");
        let subscriber = file_subscriber(file, LogLevel::Warn);

        // Act
        tracing::subscriber::with_default(subscriber, || {
            debug!("hidden detail");
            warn!(name = "Rex", "rejected duplicate dog name");
        });

        // Assert
        let contents = fs::read_to_string(&path).expect("failed to read log file");
        assert!(contents.contains("rejected duplicate dog name"));
        assert!(contents.contains("Rex"));
        assert!(!contents.contains("hidden detail"));
    }

    #[test]
    fn test_init_without_log_file_is_noop() {
        // Arrange
        let config = AppConfig::default();

        // Act
        let result = init(&config);

        // Assert
        assert!(result.is_ok());
    }
}
