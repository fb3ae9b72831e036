use std::path::Path;

use anyhow::{Context, Result};

use quizbook_lib::storage::backup::{
    default_backup_path, export_data_to_zip, list_backups, restore_from_zip,
};

use crate::app::App;
use crate::OutputFormat;

pub fn run_create(app: &App, output: Option<&Path>, _use_color: bool) -> Result<()> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_backup_path(&app.data_dir),
    };

    let metadata = export_data_to_zip(&app.data_dir, &output_path)
        .context("Failed to create backup")?;

    println!("Backup written to {}", output_path.display());
    println!("  Quizzes:      {}", metadata.quiz_count);
    println!("  Recall items: {}", metadata.recall_item_count);
    Ok(())
}

pub fn run_list(app: &App, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let backups = list_backups(&app.data_dir).context("Failed to list backups")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&backups)?);
        }
        OutputFormat::Plain => {
            if backups.is_empty() {
                println!("No backups yet. Create one with: quizbook backup create");
                return Ok(());
            }

            for backup in &backups {
                let name = backup.path.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| backup.path.display().to_string());
                println!("{}  {:>8} KiB  {}",
                    backup.modified_at.format("%Y-%m-%d %H:%M"),
                    backup.size_bytes / 1024,
                    name);
            }
        }
    }

    Ok(())
}

pub fn run_restore(app: &App, file: &Path, _use_color: bool) -> Result<()> {
    let metadata = restore_from_zip(file, &app.data_dir)
        .context("Failed to restore backup")?;

    println!("Restored backup from {}", file.display());
    println!("  Quizzes:      {}", metadata.quiz_count);
    println!("  Recall items: {}", metadata.recall_item_count);
    Ok(())
}
