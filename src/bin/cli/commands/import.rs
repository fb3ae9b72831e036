use std::path::Path;

use anyhow::{Context, Result};

use quizbook_lib::history::GeneratedQuiz;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, file: &Path, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let content = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
            .context("Failed to read quiz from stdin")?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?
    };

    let generated: GeneratedQuiz = serde_json::from_str(&content)
        .context("File is not a valid generated quiz document")?;

    let record = app.history.import(generated)
        .context("Failed to import quiz")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": record.id.to_string(),
                "title": record.title,
                "questions": record.questions.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Imported \"{}\" ({} questions)", record.title, record.questions.len());
            println!("  Id: {}", record.id);
            println!("  Take it with: quizbook take \"{}\"", record.title);
        }
    }

    Ok(())
}
