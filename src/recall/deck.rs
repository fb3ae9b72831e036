//! Recall deck operations.
//!
//! Every mutation is a single load → modify → save pass over the store;
//! if the save fails the error is surfaced once and the next operation
//! re-reads whatever is on disk.

use chrono::Utc;
use uuid::Uuid;

use crate::quiz::Question;
use crate::storage::{Result, StorageError};

use super::algorithm::next_review;
use super::models::{Performance, RecallItem};
use super::store::DeckStore;

/// Statistics over the recall deck
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStats {
    pub total_items: usize,
    pub due_items: usize,
    pub average_ease_factor: f32,
    pub total_reviews: u32,
    pub total_lapses: u32,
}

/// The recall deck over an injected store
pub struct RecallDeck<S: DeckStore> {
    store: S,
}

impl<S: DeckStore> RecallDeck<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Capture a question into the deck
    pub fn add(&self, question: Question, source_quiz_id: Option<Uuid>) -> Result<RecallItem> {
        let mut items = self.store.load()?;
        let item = RecallItem::new(question, source_quiz_id);
        items.push(item.clone());
        self.store.save(&items)?;

        log::debug!("Added recall item {}", item.id);
        Ok(item)
    }

    /// All items, in insertion order
    pub fn list(&self) -> Result<Vec<RecallItem>> {
        self.store.load()
    }

    pub fn get(&self, id: Uuid) -> Result<RecallItem> {
        self.store
            .load()?
            .into_iter()
            .find(|i| i.id == id)
            .ok_or(StorageError::RecallItemNotFound(id))
    }

    /// Remove an item from the deck
    pub fn remove(&self, id: Uuid) -> Result<()> {
        let mut items = self.store.load()?;
        let len_before = items.len();
        items.retain(|i| i.id != id);

        if items.len() == len_before {
            return Err(StorageError::RecallItemNotFound(id));
        }

        self.store.save(&items)?;
        Ok(())
    }

    /// Items due for review, in insertion order
    pub fn due_items(&self) -> Result<Vec<RecallItem>> {
        let now = Utc::now();
        Ok(self
            .store
            .load()?
            .into_iter()
            .filter(|i| i.next_review_at <= now)
            .collect())
    }

    /// Apply a review rating to an item and persist the rescheduled state
    pub fn review(&self, id: Uuid, performance: Performance) -> Result<RecallItem> {
        let mut items = self.store.load()?;
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(StorageError::RecallItemNotFound(id))?;

        let result = next_review(item, performance);
        item.interval = result.interval;
        item.ease_factor = result.ease_factor;
        item.next_review_at = result.next_review_at;
        item.review_count += 1;
        if performance == Performance::Forgot {
            item.lapse_count += 1;
        }

        let updated = item.clone();
        self.store.save(&items)?;
        Ok(updated)
    }

    pub fn stats(&self) -> Result<DeckStats> {
        let items = self.store.load()?;
        let now = Utc::now();

        let total_items = items.len();
        let due_items = items.iter().filter(|i| i.next_review_at <= now).count();
        let average_ease_factor = if items.is_empty() {
            0.0
        } else {
            items.iter().map(|i| i.ease_factor).sum::<f32>() / items.len() as f32
        };
        let total_reviews = items.iter().map(|i| i.review_count).sum();
        let total_lapses = items.iter().map(|i| i.lapse_count).sum();

        Ok(DeckStats {
            total_items,
            due_items,
            average_ease_factor,
            total_reviews,
            total_lapses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recall::store::MemoryStore;
    use chrono::Duration;

    fn test_question(prompt: &str) -> Question {
        Question::ShortAnswer {
            prompt: prompt.to_string(),
            accepted: vec!["answer".to_string()],
            explanation: None,
        }
    }

    fn test_deck() -> RecallDeck<MemoryStore> {
        RecallDeck::new(MemoryStore::new())
    }

    #[test]
    fn test_add_starts_due_with_defaults() {
        let deck = test_deck();
        let item = deck.add(test_question("q"), None).unwrap();

        assert_eq!(item.interval, 1);
        assert_eq!(item.ease_factor, 2.5);
        assert_eq!(deck.due_items().unwrap().len(), 1);
    }

    #[test]
    fn test_due_items_keep_insertion_order() {
        let deck = test_deck();
        let a = deck.add(test_question("a"), None).unwrap();
        let b = deck.add(test_question("b"), None).unwrap();
        let c = deck.add(test_question("c"), None).unwrap();

        // Make the middle item look older-scheduled than the first; the
        // due set must still come back in insertion order, unsorted.
        let mut items = deck.list().unwrap();
        items[1].next_review_at = Utc::now() - Duration::days(30);
        deck.store.save(&items).unwrap();

        let due: Vec<Uuid> = deck.due_items().unwrap().iter().map(|i| i.id).collect();
        assert_eq!(due, vec![a.id, b.id, c.id]);
    }

    #[test]
    fn test_due_items_exclude_future() {
        let deck = test_deck();
        deck.add(test_question("due"), None).unwrap();
        let later = deck.add(test_question("later"), None).unwrap();

        let mut items = deck.list().unwrap();
        items.iter_mut().find(|i| i.id == later.id).unwrap().next_review_at =
            Utc::now() + Duration::days(2);
        deck.store.save(&items).unwrap();

        let due = deck.due_items().unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].question, test_question("due"));
    }

    #[test]
    fn test_review_good_persists_schedule() {
        let deck = test_deck();
        let item = deck.add(test_question("q"), None).unwrap();

        let updated = deck.review(item.id, Performance::Good).unwrap();
        assert_eq!(updated.interval, 3);
        assert_eq!(updated.review_count, 1);
        assert_eq!(updated.lapse_count, 0);
        assert!(!updated.is_due());

        // Write-through, not just the returned copy
        let reloaded = deck.get(item.id).unwrap();
        assert_eq!(reloaded.interval, 3);
        assert_eq!(deck.due_items().unwrap().len(), 0);
    }

    #[test]
    fn test_review_forgot_counts_lapse_and_stays_due_soon() {
        let deck = test_deck();
        let item = deck.add(test_question("q"), None).unwrap();
        deck.review(item.id, Performance::Good).unwrap();

        let updated = deck.review(item.id, Performance::Forgot).unwrap();
        assert_eq!(updated.interval, 1);
        assert_eq!(updated.lapse_count, 1);
        assert!((updated.ease_factor - 2.3).abs() < 1e-6);
    }

    #[test]
    fn test_review_unknown_item() {
        let deck = test_deck();
        assert!(matches!(
            deck.review(Uuid::new_v4(), Performance::Good),
            Err(StorageError::RecallItemNotFound(_))
        ));
    }

    #[test]
    fn test_remove() {
        let deck = test_deck();
        let item = deck.add(test_question("q"), None).unwrap();

        deck.remove(item.id).unwrap();
        assert!(deck.list().unwrap().is_empty());
        assert!(matches!(
            deck.remove(item.id),
            Err(StorageError::RecallItemNotFound(_))
        ));
    }

    #[test]
    fn test_stats() {
        let deck = test_deck();
        let a = deck.add(test_question("a"), None).unwrap();
        deck.add(test_question("b"), None).unwrap();
        deck.review(a.id, Performance::Forgot).unwrap();

        let stats = deck.stats().unwrap();
        assert_eq!(stats.total_items, 2);
        assert_eq!(stats.due_items, 2);
        assert_eq!(stats.total_reviews, 1);
        assert_eq!(stats.total_lapses, 1);
        assert!(stats.average_ease_factor > 2.3 && stats.average_ease_factor < 2.5);
    }
}
