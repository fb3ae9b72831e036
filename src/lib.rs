//! quizbook — local quiz history and spaced review.
//!
//! Quizzes are produced by an external generator and enter this crate as
//! JSON documents. Everything local lives here: the quiz history, the
//! quiz-taking session, and the recall deck with its spaced-repetition
//! scheduler. All state is kept as plain JSON files under a single data
//! directory.

pub mod history;
pub mod quiz;
pub mod recall;
pub mod storage;
