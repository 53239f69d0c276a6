//! Persistent storage
//!
//! Everything the app writes lives in one per-user directory:
//! - `scores.db`: SQLite high-score table (see `scores`)
//! - `settings.ron`: tuning values (see `crate::config`)
//!
//! Native only for now; all operations are synchronous and open their file
//! per call.

pub mod scores;

pub use scores::{ScoreEntry, ScoreStore};

use std::path::{Path, PathBuf};

/// Directory name under the platform data dir
pub const APP_NAME: &str = "EndlessRunner";

/// Storage error types
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Where app data goes under `base`, or under the working directory when the
/// platform reports no data dir.
pub fn app_dir(base: Option<&Path>) -> PathBuf {
    base.unwrap_or_else(|| Path::new(".")).join(APP_NAME)
}

/// Per-user data directory, created on demand.
///
/// LOCALAPPDATA on Windows, Application Support on macOS, the XDG data dir
/// on Linux.
pub fn user_data_dir() -> Result<PathBuf, StorageError> {
    let base = dirs::data_local_dir();
    if base.is_none() {
        log::warn!("No platform data directory, using working directory");
    }
    let dir = app_dir(base.as_deref());
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_dir() {
        assert_eq!(app_dir(Some(Path::new("/data"))), PathBuf::from("/data/EndlessRunner"));
        assert_eq!(app_dir(None), PathBuf::from("./EndlessRunner"));
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "IO error: gone");
    }
}
