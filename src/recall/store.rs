//! Deck persistence behind an explicit load/save seam.
//!
//! The deck on disk is one flat JSON array in a single file, read fully
//! and rewritten fully on every mutation. The `DeckStore` trait keeps
//! the scheduler logic independent of that choice, so an embedded
//! database could be substituted without touching it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::storage::Result;

use super::models::RecallItem;

/// Explicit load/save access to the persisted recall deck
pub trait DeckStore {
    /// Load the full deck. A missing deck is an empty deck.
    fn load(&self) -> Result<Vec<RecallItem>>;

    /// Replace the persisted deck with `items`
    fn save(&self, items: &[RecallItem]) -> Result<()>;
}

/// Production store: `recall.json` under the data directory
pub struct JsonDeckStore {
    path: PathBuf,
}

impl JsonDeckStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            path: data_dir.join("recall.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeckStore for JsonDeckStore {
    fn load(&self) -> Result<Vec<RecallItem>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(items) => Ok(items),
            Err(e) => {
                // Unreadable deck: quarantine the file and restart empty
                // rather than failing every deck operation from here on.
                let quarantine = self.path.with_extension("json.corrupt");
                log::warn!(
                    "Recall deck at {} is unreadable ({}); moving it to {}",
                    self.path.display(),
                    e,
                    quarantine.display()
                );
                fs::rename(&self.path, &quarantine)?;
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, items: &[RecallItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(items)?)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding
pub struct MemoryStore {
    items: Mutex<Vec<RecallItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckStore for MemoryStore {
    fn load(&self) -> Result<Vec<RecallItem>> {
        Ok(self.items.lock().expect("deck store lock poisoned").clone())
    }

    fn save(&self, items: &[RecallItem]) -> Result<()> {
        *self.items.lock().expect("deck store lock poisoned") = items.to_vec();
        Ok(())
    }
}
