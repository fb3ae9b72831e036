use anyhow::{bail, Context, Result};
use chrono::Utc;

use quizbook_lib::recall::algorithm::format_interval;

use crate::app::App;
use crate::OutputFormat;

pub fn run_list(app: &App, due_only: bool, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let items = if due_only {
        app.deck.due_items().context("Failed to load recall deck")?
    } else {
        app.deck.list().context("Failed to load recall deck")?
    };

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = items.iter().map(|item| {
                serde_json::json!({
                    "id": item.id.to_string(),
                    "question": item.question.prompt(),
                    "nextReviewAt": item.next_review_at.to_rfc3339(),
                    "interval": item.interval,
                    "easeFactor": item.ease_factor,
                    "reviewCount": item.review_count,
                    "lapseCount": item.lapse_count,
                })
            }).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if items.is_empty() {
                println!("No recall items{}.", if due_only { " due" } else { "" });
                return Ok(());
            }

            let now = Utc::now();
            println!("{:<8} {:<44} {:>10} {:>8} {:>5}", "Id", "Question", "Due", "Interval", "Ease");
            println!("{} {} {} {} {}",
                "\u{2500}".repeat(8),
                "\u{2500}".repeat(44),
                "\u{2500}".repeat(10),
                "\u{2500}".repeat(8),
                "\u{2500}".repeat(5));

            for item in &items {
                let prompt = item.question.prompt();
                let question = if prompt.len() > 44 {
                    format!("{}...", &prompt[..41])
                } else {
                    prompt.to_string()
                };

                let due = if item.next_review_at <= now {
                    "now".to_string()
                } else {
                    item.next_review_at.format("%Y-%m-%d").to_string()
                };

                println!("{:<8} {:<44} {:>10} {:>8} {:>5.2}",
                    &item.id.to_string()[..8],
                    question,
                    due,
                    format_interval(item.interval),
                    item.ease_factor);
            }

            println!("\n{} items total", items.len());
        }
    }

    Ok(())
}

pub fn run_add(app: &App, quiz: &str, number: usize, _use_color: bool) -> Result<()> {
    let record = app.find_quiz(quiz)?;

    if number == 0 || number > record.questions.len() {
        bail!(
            "Quiz \"{}\" has {} questions; cannot add question {}",
            record.title,
            record.questions.len(),
            number
        );
    }

    let question = record.questions[number - 1].clone();
    let item = app.deck.add(question, Some(record.id))
        .context("Failed to add recall item")?;

    println!("Added to recall deck: \"{}\"", item.question.prompt());
    println!("  Id: {}", item.id);
    Ok(())
}

pub fn run_remove(app: &App, id: &str, _use_color: bool) -> Result<()> {
    let item = app.find_recall_item(id)?;
    app.deck.remove(item.id).context("Failed to remove recall item")?;

    println!("Removed recall item \"{}\"", item.question.prompt());
    Ok(())
}
