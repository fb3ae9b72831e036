//! Interactive quiz-taking session.
//!
//! A session takes a snapshot of a quiz's questions and walks it with a
//! movable cursor. Answers can be changed freely until `finish()`, which
//! grades everything and produces the outcome to store in history.
//! Everything is synchronous and single-threaded; the caller drives the
//! session from direct user interaction.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::history::QuizRecord;

use super::models::{Answer, Question};

/// One graded question in the post-quiz review
#[derive(Debug, Clone)]
pub struct GradedQuestion {
    /// Position within the quiz (0-based)
    pub index: usize,
    pub question: Question,
    /// The answer that was given, if any
    pub given: Option<Answer>,
    pub correct: bool,
}

/// Result of finishing a quiz session
#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub score: u32,
    pub total: u32,
    /// Score as a percentage, rounded to one decimal
    pub percentage: f32,
    pub time_taken_secs: i64,
    pub review: Vec<GradedQuestion>,
}

impl QuizOutcome {
    /// Graded questions that were answered wrong or skipped
    pub fn missed(&self) -> impl Iterator<Item = &GradedQuestion> {
        self.review.iter().filter(|g| !g.correct)
    }
}

/// A walkthrough over a quiz snapshot
pub struct QuizSession {
    quiz_id: Uuid,
    title: String,
    questions: Vec<Question>,
    answers: Vec<Option<Answer>>,
    position: usize,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start a session over a snapshot of the quiz's questions
    pub fn new(record: &QuizRecord) -> Self {
        Self {
            quiz_id: record.id,
            title: record.title.clone(),
            questions: record.questions.clone(),
            answers: vec![None; record.questions.len()],
            position: 0,
            started_at: Utc::now(),
        }
    }

    pub fn quiz_id(&self) -> Uuid {
        self.quiz_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Current cursor position (0-based)
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    /// The recorded answer for the current question
    pub fn current_answer(&self) -> Option<&Answer> {
        self.answers.get(self.position).and_then(|a| a.as_ref())
    }

    pub fn answer_at(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index).and_then(|a| a.as_ref())
    }

    /// Record (or replace) the answer for the current question
    pub fn answer_current(&mut self, answer: Answer) {
        if self.position < self.answers.len() {
            self.answers[self.position] = Some(answer);
        }
    }

    /// Move to the next question; stops at the last one
    pub fn next(&mut self) {
        if self.position + 1 < self.questions.len() {
            self.position += 1;
        }
    }

    /// Move to the previous question; stops at the first one
    pub fn previous(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn goto(&mut self, index: usize) {
        if index < self.questions.len() {
            self.position = index;
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_fully_answered(&self) -> bool {
        self.answered_count() == self.questions.len()
    }

    /// Grade the session. Unanswered questions count as wrong.
    pub fn finish(&self) -> QuizOutcome {
        let mut review = Vec::with_capacity(self.questions.len());
        let mut score = 0u32;

        for (index, question) in self.questions.iter().enumerate() {
            let given = self.answers[index].clone();
            let correct = given
                .as_ref()
                .map(|a| question.grade(a))
                .unwrap_or(false);
            if correct {
                score += 1;
            }
            review.push(GradedQuestion {
                index,
                question: question.clone(),
                given,
                correct,
            });
        }

        let total = self.questions.len() as u32;
        let percentage = if total == 0 {
            0.0
        } else {
            (score as f32 / total as f32 * 1000.0).round() / 10.0
        };
        let time_taken_secs = (Utc::now() - self.started_at).num_seconds();

        QuizOutcome {
            score,
            total,
            percentage,
            time_taken_secs,
            review,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record() -> QuizRecord {
        QuizRecord::new(
            "Geography".to_string(),
            vec![
                Question::MultipleChoice {
                    prompt: "Capital of France?".to_string(),
                    options: vec!["Berlin".to_string(), "Paris".to_string()],
                    correct: 1,
                    explanation: None,
                },
                Question::TrueFalse {
                    prompt: "The Nile is in Europe.".to_string(),
                    answer: false,
                    explanation: None,
                },
                Question::ShortAnswer {
                    prompt: "Largest ocean?".to_string(),
                    accepted: vec!["Pacific".to_string(), "Pacific Ocean".to_string()],
                    explanation: None,
                },
            ],
        )
    }

    #[test]
    fn test_navigation_clamps_at_ends() {
        let record = test_record();
        let mut session = QuizSession::new(&record);

        session.previous();
        assert_eq!(session.position(), 0);

        session.next();
        session.next();
        session.next();
        assert_eq!(session.position(), 2);
    }

    #[test]
    fn test_reanswer_replaces() {
        let record = test_record();
        let mut session = QuizSession::new(&record);

        session.answer_current(Answer::Choice { index: 0 });
        session.answer_current(Answer::Choice { index: 1 });
        assert_eq!(session.answered_count(), 1);

        let outcome = session.finish();
        assert!(outcome.review[0].correct);
    }

    #[test]
    fn test_finish_scores_and_counts_unanswered_wrong() {
        let record = test_record();
        let mut session = QuizSession::new(&record);

        session.answer_current(Answer::Choice { index: 1 });
        session.next();
        session.answer_current(Answer::Bool { value: false });
        // Third question left unanswered

        let outcome = session.finish();
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.percentage, 66.7);
        assert_eq!(outcome.missed().count(), 1);
        assert_eq!(outcome.review[2].given, None);
        assert!(!outcome.review[2].correct);
    }

    #[test]
    fn test_full_marks() {
        let record = test_record();
        let mut session = QuizSession::new(&record);

        session.answer_current(Answer::Choice { index: 1 });
        session.next();
        session.answer_current(Answer::Bool { value: false });
        session.next();
        session.answer_current(Answer::Text { value: "pacific ocean".to_string() });

        assert!(session.is_fully_answered());
        let outcome = session.finish();
        assert_eq!(outcome.score, 3);
        assert_eq!(outcome.percentage, 100.0);
        assert_eq!(outcome.missed().count(), 0);
    }
}
