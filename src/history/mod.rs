//! Quiz history: locally stored quiz records
//!
//! This module provides:
//! - `QuizRecord`, a quiz with its questions and (once taken) its result
//! - Import of generated quiz documents
//! - `HistoryStorage`, one JSON file per quiz under the data directory

pub mod models;
pub mod storage;

pub use models::{GeneratedQuiz, QuizRecord};
pub use storage::HistoryStorage;
