use std::collections::HashSet;

use anyhow::Result;

use quizbook_lib::history::QuizRecord;
use quizbook_lib::quiz::{Answer, Question, QuizOutcome, QuizSession};
use quizbook_lib::recall::{Performance, ReviewSession};

use crate::app::App;

/// Which screen the TUI is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    // Recall review flow
    ReviewPrompt,
    ReviewRevealed,
    ReviewSummary,
    // Quiz-taking flow
    Question,
    AnswerInput,
    Score,
    ReviewAnswers,
}

pub struct TuiState {
    pub app: App,
    pub screen: Screen,
    pub quit: bool,
    pub flash_message: Option<String>,

    // Recall review flow
    pub review: Option<ReviewSession>,

    // Quiz-taking flow
    pub session: Option<QuizSession>,
    pub selected_option: usize,
    pub input_text: String,
    pub outcome: Option<QuizOutcome>,
    pub review_index: usize,
    pub added_to_recall: HashSet<usize>,
}

impl TuiState {
    fn empty(app: App, screen: Screen) -> Self {
        Self {
            app,
            screen,
            quit: false,
            flash_message: None,
            review: None,
            session: None,
            selected_option: 0,
            input_text: String::new(),
            outcome: None,
            review_index: 0,
            added_to_recall: HashSet::new(),
        }
    }

    /// Start a recall review session over the current due set
    pub fn review(app: App) -> Result<Self> {
        let session = ReviewSession::start(&app.deck)?;
        let screen = if session.is_complete() {
            Screen::ReviewSummary
        } else {
            Screen::ReviewPrompt
        };

        let mut state = Self::empty(app, screen);
        state.review = Some(session);
        Ok(state)
    }

    /// Start taking a quiz
    pub fn take(app: App, record: &QuizRecord) -> Self {
        let mut state = Self::empty(app, Screen::Question);
        state.session = Some(QuizSession::new(record));
        state
    }

    // ==================== Recall review flow ====================

    pub fn reveal(&mut self) {
        self.screen = Screen::ReviewRevealed;
    }

    /// Rate the current item and advance
    pub fn rate(&mut self, performance: Performance) {
        let Some(review) = self.review.as_mut() else { return };

        match review.rate(&self.app.deck, performance) {
            Ok(()) => {
                self.screen = if review.is_complete() {
                    Screen::ReviewSummary
                } else {
                    Screen::ReviewPrompt
                };
            }
            Err(e) => {
                // Surface the failure once; the item stays unrated
                self.flash_message = Some(format!("Save failed: {}", e));
            }
        }
    }

    pub fn skip_review_item(&mut self) {
        let Some(review) = self.review.as_mut() else { return };

        review.skip();
        self.screen = if review.is_complete() {
            Screen::ReviewSummary
        } else {
            Screen::ReviewPrompt
        };
    }

    // ==================== Quiz-taking flow ====================

    /// Number of selectable rows for the current question
    fn option_count(&self) -> usize {
        match self.session.as_ref().and_then(|s| s.current()) {
            Some(Question::MultipleChoice { options, .. }) => options.len(),
            Some(Question::TrueFalse { .. }) => 2,
            _ => 0,
        }
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 && self.selected_option + 1 < count {
            self.selected_option += 1;
        }
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = self.selected_option.saturating_sub(1);
    }

    /// Confirm the highlighted option, or open text input for short answers
    pub fn confirm_answer(&mut self) {
        let Some(session) = self.session.as_mut() else { return };

        let answer = match session.current() {
            Some(Question::MultipleChoice { .. }) => {
                Some(Answer::Choice { index: self.selected_option })
            }
            Some(Question::TrueFalse { .. }) => {
                Some(Answer::Bool { value: self.selected_option == 0 })
            }
            Some(Question::ShortAnswer { .. }) => {
                self.input_text = match session.current_answer() {
                    Some(Answer::Text { value }) => value.clone(),
                    _ => String::new(),
                };
                self.screen = Screen::AnswerInput;
                None
            }
            None => None,
        };

        if let Some(answer) = answer {
            session.answer_current(answer);
            self.advance_question();
        }
    }

    pub fn submit_input(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.answer_current(Answer::Text { value: self.input_text.clone() });
        }
        self.input_text.clear();
        self.screen = Screen::Question;
        self.advance_question();
    }

    fn advance_question(&mut self) {
        let Some(session) = self.session.as_mut() else { return };

        if session.position() + 1 < session.len() {
            session.next();
            self.sync_selected_option();
        }
    }

    pub fn next_question(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.next();
        }
        self.sync_selected_option();
    }

    pub fn previous_question(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.previous();
        }
        self.sync_selected_option();
    }

    /// Point the highlight at the recorded answer, if any
    fn sync_selected_option(&mut self) {
        let Some(session) = self.session.as_ref() else { return };

        self.selected_option = match (session.current(), session.current_answer()) {
            (Some(Question::MultipleChoice { .. }), Some(Answer::Choice { index })) => *index,
            (Some(Question::TrueFalse { .. }), Some(Answer::Bool { value })) => {
                if *value { 0 } else { 1 }
            }
            _ => 0,
        };
    }

    /// Grade the quiz, persist the outcome, and show the score screen
    pub fn finish_quiz(&mut self) {
        let Some(session) = self.session.as_ref() else { return };

        let outcome = session.finish();
        if let Err(e) = self.app.history.record_outcome(session.quiz_id(), &outcome) {
            self.flash_message = Some(format!("Save failed: {}", e));
        }
        self.outcome = Some(outcome);
        self.review_index = 0;
        self.screen = Screen::Score;
    }

    pub fn next_review_answer(&mut self) {
        let count = self.outcome.as_ref().map(|o| o.review.len()).unwrap_or(0);
        if count > 0 && self.review_index + 1 < count {
            self.review_index += 1;
        }
    }

    pub fn previous_review_answer(&mut self) {
        self.review_index = self.review_index.saturating_sub(1);
    }

    /// Add the currently shown missed question to the recall deck
    pub fn add_current_to_recall(&mut self) {
        let quiz_id = self.session.as_ref().map(QuizSession::quiz_id);
        let Some(outcome) = self.outcome.as_ref() else { return };
        let Some(graded) = outcome.review.get(self.review_index) else { return };

        if graded.correct {
            self.flash_message = Some("Answered correctly; not added".to_string());
            return;
        }
        if self.added_to_recall.contains(&self.review_index) {
            self.flash_message = Some("Already in the recall deck".to_string());
            return;
        }

        match self.app.deck.add(graded.question.clone(), quiz_id) {
            Ok(_) => {
                self.added_to_recall.insert(self.review_index);
                self.flash_message = Some("Added to recall deck".to_string());
            }
            Err(e) => {
                self.flash_message = Some(format!("Save failed: {}", e));
            }
        }
    }
}
