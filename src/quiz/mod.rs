//! Quiz questions and the quiz-taking session
//!
//! This module provides:
//! - Question and answer models for generated quizzes
//! - Grading rules per question type
//! - `QuizSession`, the interactive walkthrough over a quiz snapshot

pub mod models;
pub mod session;

pub use models::*;
pub use session::{GradedQuestion, QuizOutcome, QuizSession};
