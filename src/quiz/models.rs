//! Data models for quiz questions and answers

use serde::{Deserialize, Serialize};

/// An image bundled with a generated quiz.
///
/// The generator inlines images as data URIs; the payload is carried
/// opaquely and never interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedImage {
    pub name: String,
    pub data: String,
}

/// A single quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Question {
    /// Pick one option out of several
    #[serde(rename_all = "camelCase")]
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        /// Index into `options`
        correct: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
    /// Statement judged true or false
    #[serde(rename_all = "camelCase")]
    TrueFalse {
        prompt: String,
        answer: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
    /// Free-text answer matched against a list of accepted forms
    #[serde(rename_all = "camelCase")]
    ShortAnswer {
        prompt: String,
        accepted: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
    },
}

impl Question {
    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice { prompt, .. } => prompt,
            Question::TrueFalse { prompt, .. } => prompt,
            Question::ShortAnswer { prompt, .. } => prompt,
        }
    }

    pub fn explanation(&self) -> Option<&str> {
        match self {
            Question::MultipleChoice { explanation, .. } => explanation.as_deref(),
            Question::TrueFalse { explanation, .. } => explanation.as_deref(),
            Question::ShortAnswer { explanation, .. } => explanation.as_deref(),
        }
    }

    /// Render the correct answer for display
    pub fn correct_display(&self) -> String {
        match self {
            Question::MultipleChoice { options, correct, .. } => options
                .get(*correct)
                .cloned()
                .unwrap_or_else(|| format!("option {}", correct + 1)),
            Question::TrueFalse { answer, .. } => {
                if *answer { "True".to_string() } else { "False".to_string() }
            }
            Question::ShortAnswer { accepted, .. } => {
                accepted.first().cloned().unwrap_or_default()
            }
        }
    }

    /// Grade an answer against this question.
    ///
    /// An answer of the wrong kind (e.g. free text for a multiple-choice
    /// question) is simply wrong, not an error.
    pub fn grade(&self, answer: &Answer) -> bool {
        match (self, answer) {
            (Question::MultipleChoice { correct, .. }, Answer::Choice { index }) => {
                index == correct
            }
            (Question::TrueFalse { answer: expected, .. }, Answer::Bool { value }) => {
                value == expected
            }
            (Question::ShortAnswer { accepted, .. }, Answer::Text { value }) => {
                let given = normalize(value);
                !given.is_empty() && accepted.iter().any(|a| normalize(a) == given)
            }
            _ => false,
        }
    }
}

/// A recorded answer to a quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Answer {
    /// Selected option index for a multiple-choice question
    Choice { index: usize },
    /// True/false judgement
    Bool { value: bool },
    /// Free-text answer
    Text { value: String },
}

impl Answer {
    /// Render the answer for display, resolving option indices
    pub fn display(&self, question: &Question) -> String {
        match self {
            Answer::Choice { index } => {
                if let Question::MultipleChoice { options, .. } = question {
                    if let Some(opt) = options.get(*index) {
                        return opt.clone();
                    }
                }
                format!("option {}", index + 1)
            }
            Answer::Bool { value } => {
                if *value { "True".to_string() } else { "False".to_string() }
            }
            Answer::Text { value } => value.clone(),
        }
    }
}

/// Case- and whitespace-insensitive form used for short-answer matching
fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq() -> Question {
        Question::MultipleChoice {
            prompt: "Capital of France?".to_string(),
            options: vec!["Berlin".to_string(), "Paris".to_string(), "Rome".to_string()],
            correct: 1,
            explanation: None,
        }
    }

    #[test]
    fn test_grade_multiple_choice() {
        let q = mcq();
        assert!(q.grade(&Answer::Choice { index: 1 }));
        assert!(!q.grade(&Answer::Choice { index: 0 }));
    }

    #[test]
    fn test_grade_true_false() {
        let q = Question::TrueFalse {
            prompt: "The sky is blue.".to_string(),
            answer: true,
            explanation: None,
        };
        assert!(q.grade(&Answer::Bool { value: true }));
        assert!(!q.grade(&Answer::Bool { value: false }));
    }

    #[test]
    fn test_grade_short_answer_normalizes() {
        let q = Question::ShortAnswer {
            prompt: "Who wrote Hamlet?".to_string(),
            accepted: vec!["William Shakespeare".to_string(), "Shakespeare".to_string()],
            explanation: None,
        };
        assert!(q.grade(&Answer::Text { value: "  william   SHAKESPEARE ".to_string() }));
        assert!(q.grade(&Answer::Text { value: "shakespeare".to_string() }));
        assert!(!q.grade(&Answer::Text { value: "Marlowe".to_string() }));
        assert!(!q.grade(&Answer::Text { value: "   ".to_string() }));
    }

    #[test]
    fn test_grade_mismatched_answer_kind() {
        let q = mcq();
        assert!(!q.grade(&Answer::Text { value: "Paris".to_string() }));
        assert!(!q.grade(&Answer::Bool { value: true }));
    }

    #[test]
    fn test_answer_display_resolves_option() {
        let q = mcq();
        assert_eq!(Answer::Choice { index: 2 }.display(&q), "Rome");
        assert_eq!(Answer::Choice { index: 9 }.display(&q), "option 10");
    }
}
