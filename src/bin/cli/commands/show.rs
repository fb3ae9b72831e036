use anyhow::Result;

use quizbook_lib::quiz::Question;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, quiz: &str, answers: bool, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let record = app.find_quiz(quiz)?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{}", record.title);
    println!("  Id: {}", record.id);
    println!("  Created: {}", record.created_at.format("%Y-%m-%d %H:%M"));
    if let (Some(score), Some(total)) = (record.score, record.total) {
        let pct = record.percentage.unwrap_or(0.0);
        println!("  Last result: {}/{} ({}%)", score, total, pct);
    }
    if !record.embedded_images.is_empty() {
        println!("  Embedded images: {}", record.embedded_images.len());
    }
    println!();

    for (i, question) in record.questions.iter().enumerate() {
        println!("{}. {}", i + 1, question.prompt());

        match question {
            Question::MultipleChoice { options, .. } => {
                for (j, option) in options.iter().enumerate() {
                    println!("   {}) {}", (b'a' + j as u8) as char, option);
                }
            }
            Question::TrueFalse { .. } => {
                println!("   True / False");
            }
            Question::ShortAnswer { .. } => {
                println!("   (free answer)");
            }
        }

        if answers {
            println!("   Answer: {}", question.correct_display());
            if let Some(explanation) = question.explanation() {
                println!("   Why: {}", explanation);
            }
        }
        println!();
    }

    Ok(())
}
