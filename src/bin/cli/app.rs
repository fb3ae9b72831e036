use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use quizbook_lib::history::{HistoryStorage, QuizRecord};
use quizbook_lib::recall::{JsonDeckStore, RecallDeck, RecallItem};
use quizbook_lib::storage;

/// Shared application state for CLI commands
pub struct App {
    pub data_dir: PathBuf,
    pub history: HistoryStorage,
    pub deck: RecallDeck<JsonDeckStore>,
}

impl App {
    /// Initialize from the given or default data directory
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => storage::default_data_dir().context("Failed to resolve data directory")?,
        };
        storage::init(&data_dir).context("Failed to initialize data directory")?;

        let history = HistoryStorage::new(data_dir.clone())
            .context("Failed to initialize quiz history")?;
        let deck = RecallDeck::new(JsonDeckStore::new(data_dir.clone()));

        Ok(Self { data_dir, history, deck })
    }

    /// Find a quiz by id prefix or case-insensitive title prefix
    pub fn find_quiz(&self, needle: &str) -> Result<QuizRecord> {
        let quizzes = self.history.list().context("Failed to list quizzes")?;

        let needle_lower = needle.to_lowercase();

        // Exact title match first
        if let Some(q) = quizzes.iter().find(|q| q.title.to_lowercase() == needle_lower) {
            return Ok(q.clone());
        }

        let matches: Vec<&QuizRecord> = quizzes.iter()
            .filter(|q| {
                q.id.to_string().starts_with(&needle_lower)
                    || q.title.to_lowercase().starts_with(&needle_lower)
            })
            .collect();

        match matches.len() {
            0 => bail!("No quiz matching '{}'. Available quizzes:\n{}", needle,
                quizzes.iter().map(|q| format!("  - {}", q.title)).collect::<Vec<_>>().join("\n")),
            1 => Ok(matches[0].clone()),
            _ => bail!("Ambiguous quiz '{}'. Matches:\n{}", needle,
                matches.iter().map(|q| format!("  - {} ({})", q.title, q.id)).collect::<Vec<_>>().join("\n")),
        }
    }

    /// Find a recall item by id prefix
    pub fn find_recall_item(&self, needle: &str) -> Result<RecallItem> {
        let items = self.deck.list().context("Failed to load recall deck")?;

        let needle_lower = needle.to_lowercase();
        let matches: Vec<&RecallItem> = items.iter()
            .filter(|i| i.id.to_string().starts_with(&needle_lower))
            .collect();

        match matches.len() {
            0 => bail!("No recall item with id starting '{}'", needle),
            1 => Ok(matches[0].clone()),
            _ => bail!("Ambiguous recall item id '{}' ({} matches)", needle, matches.len()),
        }
    }
}
