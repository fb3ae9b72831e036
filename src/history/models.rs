//! Data models for the quiz history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::quiz::{EmbeddedImage, Question};

/// A quiz kept in the local history.
///
/// Created on import; the result fields stay empty until the quiz has
/// been taken. Records are only ever deleted explicitly by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_taken_secs: Option<i64>,
    #[serde(default)]
    pub embedded_images: Vec<EmbeddedImage>,
}

impl QuizRecord {
    pub fn new(title: String, questions: Vec<Question>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            created_at: Utc::now(),
            questions,
            score: None,
            total: None,
            percentage: None,
            time_taken_secs: None,
            embedded_images: Vec::new(),
        }
    }

    /// Whether this quiz has been taken to completion at least once
    pub fn is_completed(&self) -> bool {
        self.score.is_some()
    }
}

/// A quiz document as produced by the external generator.
///
/// This is the import boundary: everything past it is a `QuizRecord`
/// owned by the local history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuiz {
    pub title: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub embedded_images: Vec<EmbeddedImage>,
}
