//! Logging setup
//!
//! Routes `tracing` events to a log file, truncated on each start. The
//! filter comes from `APPSHELF_LOG` (same syntax as `RUST_LOG`), default `info`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "APPSHELF_LOG";

const DEFAULT_FILTER: &str = "info";
const LOG_FILE: &str = "appshelf.log";

/// Logging setup error
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// `<data dir>/appshelf/appshelf.log`, or `appshelf.log` in the cwd when
/// there is no data dir
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("appshelf").join(LOG_FILE))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path`. Fails if one is already set.
pub fn init_logging(path: &Path) -> Result<(), LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    tracing::info!("Logging to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path() {
        let path = default_log_path();
        assert_eq!(path.file_name().unwrap(), LOG_FILE);
    }

    #[test]
    fn test_init_writes_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("test.log");

        init_logging(&path).unwrap();
        tracing::warn!("catalog test event");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("catalog test event"));

        assert!(matches!(
            init_logging(&path),
            Err(LoggingError::Install(_))
        ));
    }
}
