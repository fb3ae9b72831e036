use anyhow::{Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, _use_color: bool) -> Result<()> {
    let quizzes = app.history.list().context("Failed to list quizzes")?;
    let deck_stats = app.deck.stats().context("Failed to load recall deck")?;

    let completed: Vec<_> = quizzes.iter().filter(|q| q.is_completed()).collect();
    let average_percentage = if completed.is_empty() {
        None
    } else {
        let sum: f32 = completed.iter().filter_map(|q| q.percentage).sum();
        Some(sum / completed.len() as f32)
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "quizzes": {
                    "total": quizzes.len(),
                    "completed": completed.len(),
                    "averagePercentage": average_percentage,
                },
                "recall": deck_stats,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Quizzes");
            println!("  Total:     {}", quizzes.len());
            println!("  Completed: {}", completed.len());
            if let Some(avg) = average_percentage {
                println!("  Average:   {:.1}%", avg);
            }
            println!();
            println!("Recall deck");
            println!("  Items:     {}", deck_stats.total_items);
            println!("  Due now:   {}", deck_stats.due_items);
            println!("  Reviews:   {}", deck_stats.total_reviews);
            println!("  Lapses:    {}", deck_stats.total_lapses);
            if deck_stats.total_items > 0 {
                println!("  Avg ease:  {:.2}", deck_stats.average_ease_factor);
            }
        }
    }

    Ok(())
}
