//! Recall deck and spaced repetition
//!
//! This module provides:
//! - The recall deck: questions captured from quiz reviews
//! - The spaced-repetition scheduler (three-rating simplified SM-2)
//! - Deck persistence behind an explicit load/save store
//! - `ReviewSession`, the one-at-a-time walk over the due set

pub mod algorithm;
pub mod deck;
pub mod models;
pub mod session;
pub mod store;

pub use deck::{DeckStats, RecallDeck};
pub use models::{Performance, RecallItem};
pub use session::{ReviewSession, SessionSummary};
pub use store::{DeckStore, JsonDeckStore, MemoryStore};
