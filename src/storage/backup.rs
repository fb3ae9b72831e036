//! ZIP backup of the data directory.
//!
//! A backup is the full data directory tree (quiz records and the recall
//! deck) plus a `_backup_metadata.json` manifest, written as one ZIP
//! file. Restoring extracts over the current data directory.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::{backups_dir, Result, StorageError};

const METADATA_NAME: &str = "_backup_metadata.json";

/// Manifest stored inside the ZIP file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupMetadata {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub quiz_count: usize,
    pub recall_item_count: usize,
}

/// A backup file on disk
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub modified_at: DateTime<Utc>,
}

/// Default output path for a new backup, inside the backups directory
pub fn default_backup_path(data_dir: &Path) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%d-%H%M%S");
    backups_dir(data_dir).join(format!("quizbook-backup-{}.zip", stamp))
}

/// Export the data directory to a ZIP file
pub fn export_data_to_zip(data_dir: &Path, output_path: &Path) -> Result<BackupMetadata> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(output_path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let backups = backups_dir(data_dir);
    let mut quiz_count = 0;

    for entry in WalkDir::new(data_dir) {
        let entry = entry.map_err(|e| StorageError::Io(std::io::Error::other(e.to_string())))?;
        let path = entry.path();

        // Never back up the backups themselves
        if path.starts_with(&backups) {
            continue;
        }

        let relative_path = path
            .strip_prefix(data_dir)
            .map_err(|_| StorageError::Io(std::io::Error::other("Failed to get relative path")))?;

        if path.is_file() {
            let path_str = relative_path.to_string_lossy();
            if path_str.starts_with("quizzes/") && path_str.ends_with(".json") {
                quiz_count += 1;
            }

            zip.start_file(path_str.as_ref(), options)?;
            let mut file_content = Vec::new();
            File::open(path)?.read_to_end(&mut file_content)?;
            zip.write_all(&file_content)?;
        } else if path.is_dir() && path != data_dir {
            let name = format!("{}/", relative_path.to_string_lossy());
            zip.add_directory(name.as_str(), options)?;
        }
    }

    let metadata = BackupMetadata {
        version: "1.0".to_string(),
        created_at: Utc::now(),
        quiz_count,
        recall_item_count: count_recall_items(data_dir),
    };

    let metadata_json = serde_json::to_string_pretty(&metadata)?;
    zip.start_file(METADATA_NAME, options)?;
    zip.write_all(metadata_json.as_bytes())?;

    zip.finish()?;

    log::info!(
        "Backed up {} quizzes and {} recall items to {}",
        metadata.quiz_count,
        metadata.recall_item_count,
        output_path.display()
    );
    Ok(metadata)
}

/// List backup ZIPs in the backups directory, newest first
pub fn list_backups(data_dir: &Path) -> Result<Vec<BackupFile>> {
    let backups = backups_dir(data_dir);
    if !backups.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&backups)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "zip") {
            let meta = entry.metadata()?;
            files.push(BackupFile {
                size_bytes: meta.len(),
                modified_at: meta.modified()?.into(),
                path,
            });
        }
    }

    files.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
    Ok(files)
}

/// Restore a backup ZIP over the data directory.
///
/// Files from the archive overwrite their counterparts; files that only
/// exist locally are left alone.
pub fn restore_from_zip(zip_path: &Path, data_dir: &Path) -> Result<BackupMetadata> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;

    // A quizbook backup always carries the manifest
    let metadata: BackupMetadata = match archive.index_for_name(METADATA_NAME) {
        Some(index) => {
            let mut metadata_file = archive.by_index(index)?;
            let mut contents = String::new();
            metadata_file.read_to_string(&mut contents)?;
            serde_json::from_str(&contents)?
        }
        None => {
            return Err(StorageError::InvalidOperation(format!(
                "{} is not a quizbook backup",
                zip_path.display()
            )))
        }
    };

    fs::create_dir_all(data_dir)?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_string();

        if name == METADATA_NAME {
            continue;
        }

        let outpath = data_dir.join(&name);
        if name.ends_with('/') {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut outfile = File::create(&outpath)?;
            std::io::copy(&mut file, &mut outfile)?;
        }
    }

    log::info!("Restored backup from {}", zip_path.display());
    Ok(metadata)
}

fn count_recall_items(data_dir: &Path) -> usize {
    let recall_path = data_dir.join("recall.json");
    fs::read_to_string(recall_path)
        .ok()
        .and_then(|content| serde_json::from_str::<Vec<serde_json::Value>>(&content).ok())
        .map(|items| items.len())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{GeneratedQuiz, HistoryStorage};
    use crate::quiz::Question;
    use crate::recall::{JsonDeckStore, RecallDeck};
    use tempfile::TempDir;

    fn seed_data(data_dir: &Path) {
        crate::storage::init(data_dir).unwrap();

        let history = HistoryStorage::new(data_dir.to_path_buf()).unwrap();
        history
            .import(GeneratedQuiz {
                title: "Backup me".to_string(),
                questions: vec![Question::TrueFalse {
                    prompt: "p".to_string(),
                    answer: true,
                    explanation: None,
                }],
                embedded_images: Vec::new(),
            })
            .unwrap();

        let deck = RecallDeck::new(JsonDeckStore::new(data_dir.to_path_buf()));
        deck.add(
            Question::TrueFalse { prompt: "r".to_string(), answer: false, explanation: None },
            None,
        )
        .unwrap();
    }

    #[test]
    fn test_export_restore_round_trip() {
        let source = TempDir::new().unwrap();
        let data_dir = source.path().join("data");
        seed_data(&data_dir);

        let zip_path = source.path().join("backup.zip");
        let metadata = export_data_to_zip(&data_dir, &zip_path).unwrap();
        assert_eq!(metadata.quiz_count, 1);
        assert_eq!(metadata.recall_item_count, 1);

        let target = TempDir::new().unwrap();
        let restored_dir = target.path().join("data");
        let restored = restore_from_zip(&zip_path, &restored_dir).unwrap();
        assert_eq!(restored.quiz_count, 1);

        let history = HistoryStorage::new(restored_dir.clone()).unwrap();
        assert_eq!(history.list().unwrap().len(), 1);
        let deck = RecallDeck::new(JsonDeckStore::new(restored_dir));
        assert_eq!(deck.list().unwrap().len(), 1);
    }

    #[test]
    fn test_export_skips_existing_backups() {
        let source = TempDir::new().unwrap();
        let data_dir = source.path().join("data");
        seed_data(&data_dir);

        // A previous backup sits in the backups dir; it must not nest
        let first = default_backup_path(&data_dir);
        export_data_to_zip(&data_dir, &first).unwrap();
        let second = backups_dir(&data_dir).join("second.zip");
        export_data_to_zip(&data_dir, &second).unwrap();

        let file = File::open(&second).unwrap();
        let archive = ZipArchive::new(file).unwrap();
        assert!(!archive.file_names().any(|n| n.contains("backups/")));

        assert_eq!(list_backups(&data_dir).unwrap().len(), 2);
    }

    #[test]
    fn test_restore_rejects_foreign_zip() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("foreign.zip");

        let file = File::create(&zip_path).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file("random.txt", SimpleFileOptions::default()).unwrap();
        zip.write_all(b"hello").unwrap();
        zip.finish().unwrap();

        let result = restore_from_zip(&zip_path, &temp.path().join("data"));
        assert!(matches!(result, Err(StorageError::InvalidOperation(_))));
    }
}
