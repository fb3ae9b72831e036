use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let quizzes = app.history.list()?;

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = quizzes.iter().map(|q| {
                serde_json::json!({
                    "id": q.id.to_string(),
                    "title": q.title,
                    "questions": q.questions.len(),
                    "createdAt": q.created_at.to_rfc3339(),
                    "score": q.score,
                    "total": q.total,
                    "percentage": q.percentage,
                })
            }).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if quizzes.is_empty() {
                println!("No quizzes yet. Import one with: quizbook import <file>");
                return Ok(());
            }

            let title_width = quizzes.iter().map(|q| q.title.len()).max().unwrap_or(5).min(40).max(5);

            println!("{:<tw$} {:>9} {:>9} {}", "Title", "Questions", "Score", "Created", tw = title_width);
            println!("{} {} {} {}",
                "\u{2500}".repeat(title_width),
                "\u{2500}".repeat(9),
                "\u{2500}".repeat(9),
                "\u{2500}".repeat(10));

            for quiz in &quizzes {
                let title = if quiz.title.len() > title_width {
                    format!("{}...", &quiz.title[..title_width - 3])
                } else {
                    quiz.title.clone()
                };

                let score = match (quiz.score, quiz.total) {
                    (Some(score), Some(total)) => format!("{}/{}", score, total),
                    _ => "—".to_string(),
                };

                println!("{:<tw$} {:>9} {:>9} {}",
                    title,
                    quiz.questions.len(),
                    score,
                    quiz.created_at.format("%Y-%m-%d"),
                    tw = title_width);
            }

            println!("\n{} quizzes total", quizzes.len());
        }
    }

    Ok(())
}
