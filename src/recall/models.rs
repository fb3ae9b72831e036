//! Data models for the recall deck

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::quiz::Question;

/// How well an item was remembered during review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Performance {
    /// Could not recall the answer
    Forgot,
    /// Recalled with some effort
    Good,
    /// Recalled without effort
    Easy,
}

/// A question captured into the recall deck, with its scheduling state.
///
/// The scheduler reads and writes only `interval`, `ease_factor` and
/// `next_review_at`; the question snapshot is opaque to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallItem {
    pub id: Uuid,
    /// Snapshot of the question as it appeared in the quiz
    pub question: Question,
    /// Quiz the question was captured from, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_quiz_id: Option<Uuid>,
    /// Current review interval in days (always >= 1)
    #[serde(default = "default_interval")]
    pub interval: i64,
    /// Multiplier controlling interval growth (always >= 1.3)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f32,
    /// When the item is next due for review
    pub next_review_at: DateTime<Utc>,
    pub added_at: DateTime<Utc>,
    /// Total number of reviews
    #[serde(default)]
    pub review_count: u32,
    /// Number of "forgot" ratings
    #[serde(default)]
    pub lapse_count: u32,
}

fn default_interval() -> i64 {
    1
}

pub(crate) fn default_ease_factor() -> f32 {
    2.5
}

impl RecallItem {
    /// Capture a question into the deck. New items are due immediately.
    pub fn new(question: Question, source_quiz_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            question,
            source_quiz_id,
            interval: default_interval(),
            ease_factor: default_ease_factor(),
            next_review_at: now,
            added_at: now,
            review_count: 0,
            lapse_count: 0,
        }
    }

    /// Check if the item is due for review
    pub fn is_due(&self) -> bool {
        self.next_review_at <= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_question() -> Question {
        Question::TrueFalse {
            prompt: "The Earth orbits the Sun.".to_string(),
            answer: true,
            explanation: None,
        }
    }

    #[test]
    fn test_new_item_is_due_immediately() {
        let item = RecallItem::new(test_question(), None);
        assert!(item.is_due());
        assert_eq!(item.interval, 1);
        assert_eq!(item.ease_factor, 2.5);
    }

    #[test]
    fn test_future_item_is_not_due() {
        let mut item = RecallItem::new(test_question(), None);
        item.next_review_at = Utc::now() + Duration::days(3);
        assert!(!item.is_due());
    }
}
