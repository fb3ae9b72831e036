//! Storage commons: error type, data directory resolution, backups.
//!
//! All persistent state lives under a single data directory:
//! ```text
//! quizbook/
//! ├── quizzes/
//! │   └── {quiz-id}.json   # One file per quiz record
//! ├── recall.json          # The recall deck, one flat JSON array
//! └── backups/
//!     └── quizbook-backup-{timestamp}.zip
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

pub mod backup;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Quiz not found: {0}")]
    QuizNotFound(Uuid),

    #[error("Recall item not found: {0}")]
    RecallItemNotFound(Uuid),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the default data directory.
///
/// `QUIZBOOK_DATA_DIR` overrides the platform-local default.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("QUIZBOOK_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    dirs::data_local_dir()
        .map(|p| p.join("quizbook"))
        .ok_or(StorageError::DataDirNotFound)
}

/// Initialize the data directory tree
pub fn init(data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir.join("quizzes"))?;
    fs::create_dir_all(data_dir.join("backups"))?;
    Ok(())
}

/// Directory holding per-quiz record files
pub fn quizzes_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("quizzes")
}

/// Directory holding ZIP backups
pub fn backups_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("backups")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_tree() {
        let temp = tempfile::TempDir::new().unwrap();
        let data_dir = temp.path().join("data");

        init(&data_dir).unwrap();

        assert!(quizzes_dir(&data_dir).is_dir());
        assert!(backups_dir(&data_dir).is_dir());
    }
}
