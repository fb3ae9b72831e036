//! Review session: one-at-a-time walk over the due set.
//!
//! The due set is snapshotted when the session starts and frozen for its
//! lifetime. Items rated Forgot become due again immediately but are not
//! re-presented until a new session is started.

use crate::storage::Result;

use super::deck::RecallDeck;
use super::models::{Performance, RecallItem};
use super::store::DeckStore;

/// Tally of a finished (or in-progress) review session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub reviewed: usize,
    pub forgot: usize,
    pub good: usize,
    pub easy: usize,
}

/// A walkthrough over the due items snapshotted at session start
pub struct ReviewSession {
    queue: Vec<RecallItem>,
    position: usize,
    summary: SessionSummary,
}

impl ReviewSession {
    /// Snapshot the deck's current due set and start a session over it
    pub fn start<S: DeckStore>(deck: &RecallDeck<S>) -> Result<Self> {
        Ok(Self {
            queue: deck.due_items()?,
            position: 0,
            summary: SessionSummary::default(),
        })
    }

    /// Number of items in the session snapshot
    pub fn total(&self) -> usize {
        self.queue.len()
    }

    /// The item currently being reviewed, or None once the set is done
    pub fn current(&self) -> Option<&RecallItem> {
        self.queue.get(self.position)
    }

    /// 0-based position of the current item within the snapshot
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.queue.len()
    }

    /// Rate the current item, write the result through the deck, and
    /// advance to the next item.
    pub fn rate<S: DeckStore>(
        &mut self,
        deck: &RecallDeck<S>,
        performance: Performance,
    ) -> Result<()> {
        let item = match self.queue.get(self.position) {
            Some(item) => item,
            None => return Ok(()),
        };

        deck.review(item.id, performance)?;

        self.summary.reviewed += 1;
        match performance {
            Performance::Forgot => self.summary.forgot += 1,
            Performance::Good => self.summary.good += 1,
            Performance::Easy => self.summary.easy += 1,
        }
        self.position += 1;
        Ok(())
    }

    /// Skip the current item without rating it
    pub fn skip(&mut self) {
        if self.position < self.queue.len() {
            self.position += 1;
        }
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Question;
    use crate::recall::store::MemoryStore;

    fn test_question(prompt: &str) -> Question {
        Question::TrueFalse {
            prompt: prompt.to_string(),
            answer: true,
            explanation: None,
        }
    }

    fn deck_with_items(n: usize) -> RecallDeck<MemoryStore> {
        let deck = RecallDeck::new(MemoryStore::new());
        for i in 0..n {
            deck.add(test_question(&format!("q{}", i)), None).unwrap();
        }
        deck
    }

    #[test]
    fn test_empty_deck_session_is_complete() {
        let deck = deck_with_items(0);
        let session = ReviewSession::start(&deck).unwrap();

        assert!(session.is_complete());
        assert_eq!(session.total(), 0);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_walks_items_one_at_a_time() {
        let deck = deck_with_items(3);
        let mut session = ReviewSession::start(&deck).unwrap();

        assert_eq!(session.total(), 3);
        assert_eq!(session.current().unwrap().question, test_question("q0"));

        session.rate(&deck, Performance::Good).unwrap();
        assert_eq!(session.current().unwrap().question, test_question("q1"));

        session.rate(&deck, Performance::Easy).unwrap();
        session.rate(&deck, Performance::Forgot).unwrap();

        assert!(session.is_complete());
        assert_eq!(
            *session.summary(),
            SessionSummary { reviewed: 3, forgot: 1, good: 1, easy: 1 }
        );
    }

    #[test]
    fn test_snapshot_is_frozen() {
        let deck = deck_with_items(1);
        let mut session = ReviewSession::start(&deck).unwrap();

        // Rating Forgot makes the item due again immediately, and an item
        // added mid-session is due immediately too. Neither enters the
        // frozen snapshot.
        session.rate(&deck, Performance::Forgot).unwrap();
        deck.add(test_question("late"), None).unwrap();

        assert!(session.is_complete());
        assert_eq!(deck.due_items().unwrap().len(), 2);

        // A new session picks both up
        let next = ReviewSession::start(&deck).unwrap();
        assert_eq!(next.total(), 2);
    }

    #[test]
    fn test_skip_does_not_count_as_review() {
        let deck = deck_with_items(2);
        let mut session = ReviewSession::start(&deck).unwrap();

        session.skip();
        session.rate(&deck, Performance::Good).unwrap();

        assert!(session.is_complete());
        assert_eq!(session.summary().reviewed, 1);
        // The skipped item's state is untouched
        let untouched = &deck.due_items().unwrap()[0];
        assert_eq!(untouched.review_count, 0);
    }

    #[test]
    fn test_rate_after_completion_is_a_no_op() {
        let deck = deck_with_items(1);
        let mut session = ReviewSession::start(&deck).unwrap();

        session.rate(&deck, Performance::Good).unwrap();
        session.rate(&deck, Performance::Good).unwrap();

        assert_eq!(session.summary().reviewed, 1);
    }
}
