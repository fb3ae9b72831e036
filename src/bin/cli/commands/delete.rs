use anyhow::{Context, Result};

use crate::app::App;

pub fn run(app: &App, quiz: &str, _use_color: bool) -> Result<()> {
    let record = app.find_quiz(quiz)?;
    app.history.delete(record.id).context("Failed to delete quiz")?;

    println!("Deleted quiz \"{}\"", record.title);
    Ok(())
}
