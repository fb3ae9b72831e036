//! Storage operations for the quiz history
//!
//! Each quiz is one pretty-printed JSON file:
//! ```text
//! {data-dir}/quizzes/{quiz-id}.json
//! ```

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use crate::quiz::{Question, QuizOutcome};
use crate::storage::{quizzes_dir, Result, StorageError};

use super::models::{GeneratedQuiz, QuizRecord};

/// Storage manager for quiz records
pub struct HistoryStorage {
    quizzes_dir: PathBuf,
}

impl HistoryStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let quizzes_dir = quizzes_dir(&data_dir);
        fs::create_dir_all(&quizzes_dir)?;
        Ok(Self { quizzes_dir })
    }

    fn quiz_path(&self, quiz_id: Uuid) -> PathBuf {
        self.quizzes_dir.join(format!("{}.json", quiz_id))
    }

    /// Import a generated quiz document into the history
    pub fn import(&self, generated: GeneratedQuiz) -> Result<QuizRecord> {
        validate_questions(&generated.questions)?;

        let mut record = QuizRecord::new(generated.title, generated.questions);
        record.embedded_images = generated.embedded_images;

        self.save(&record)?;
        log::info!("Imported quiz \"{}\" ({} questions)", record.title, record.questions.len());
        Ok(record)
    }

    /// List all quiz records, newest first
    pub fn list(&self) -> Result<Vec<QuizRecord>> {
        if !self.quizzes_dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&self.quizzes_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                let content = fs::read_to_string(&path)?;
                let record: QuizRecord = serde_json::from_str(&content)?;
                records.push(record);
            }
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    /// Get a specific quiz record
    pub fn get(&self, quiz_id: Uuid) -> Result<QuizRecord> {
        let path = self.quiz_path(quiz_id);
        if !path.exists() {
            return Err(StorageError::QuizNotFound(quiz_id));
        }

        let content = fs::read_to_string(&path)?;
        let record: QuizRecord = serde_json::from_str(&content)?;
        Ok(record)
    }

    /// Write a quiz record to disk
    pub fn save(&self, record: &QuizRecord) -> Result<()> {
        fs::create_dir_all(&self.quizzes_dir)?;
        let path = self.quiz_path(record.id);
        fs::write(&path, serde_json::to_string_pretty(record)?)?;
        Ok(())
    }

    /// Record the outcome of a finished quiz session on its quiz
    pub fn record_outcome(&self, quiz_id: Uuid, outcome: &QuizOutcome) -> Result<QuizRecord> {
        let mut record = self.get(quiz_id)?;

        record.score = Some(outcome.score);
        record.total = Some(outcome.total);
        record.percentage = Some(outcome.percentage);
        record.time_taken_secs = Some(outcome.time_taken_secs);

        self.save(&record)?;
        Ok(record)
    }

    /// Delete a quiz record
    pub fn delete(&self, quiz_id: Uuid) -> Result<()> {
        let path = self.quiz_path(quiz_id);
        if !path.exists() {
            return Err(StorageError::QuizNotFound(quiz_id));
        }

        fs::remove_file(&path)?;
        Ok(())
    }
}

/// Reject generated quizzes this program cannot take
fn validate_questions(questions: &[Question]) -> Result<()> {
    if questions.is_empty() {
        return Err(StorageError::InvalidOperation(
            "Quiz has no questions".to_string(),
        ));
    }

    for (i, question) in questions.iter().enumerate() {
        match question {
            Question::MultipleChoice { options, correct, .. } => {
                if options.len() < 2 {
                    return Err(StorageError::InvalidOperation(format!(
                        "Question {}: multiple choice needs at least 2 options",
                        i + 1
                    )));
                }
                if *correct >= options.len() {
                    return Err(StorageError::InvalidOperation(format!(
                        "Question {}: correct option index {} out of range",
                        i + 1,
                        correct
                    )));
                }
            }
            Question::ShortAnswer { accepted, .. } => {
                if accepted.iter().all(|a| a.trim().is_empty()) {
                    return Err(StorageError::InvalidOperation(format!(
                        "Question {}: short answer has no accepted answers",
                        i + 1
                    )));
                }
            }
            Question::TrueFalse { .. } => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Answer;
    use crate::quiz::QuizSession;
    use tempfile::TempDir;

    fn create_test_storage() -> (HistoryStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = HistoryStorage::new(temp_dir.path().to_path_buf()).unwrap();
        (storage, temp_dir)
    }

    fn generated(title: &str) -> GeneratedQuiz {
        GeneratedQuiz {
            title: title.to_string(),
            questions: vec![Question::TrueFalse {
                prompt: "Water boils at 100C at sea level.".to_string(),
                answer: true,
                explanation: None,
            }],
            embedded_images: Vec::new(),
        }
    }

    #[test]
    fn test_import_and_get() {
        let (storage, _temp) = create_test_storage();

        let record = storage.import(generated("Physics")).unwrap();
        let retrieved = storage.get(record.id).unwrap();

        assert_eq!(retrieved.title, "Physics");
        assert_eq!(retrieved.questions.len(), 1);
        assert!(!retrieved.is_completed());
    }

    #[test]
    fn test_list_newest_first() {
        let (storage, _temp) = create_test_storage();

        let first = storage.import(generated("First")).unwrap();
        let mut second = storage.import(generated("Second")).unwrap();
        // Make the ordering unambiguous
        second.created_at = first.created_at + chrono::Duration::seconds(5);
        storage.save(&second).unwrap();

        let records = storage.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Second");
        assert_eq!(records[1].title, "First");
    }

    #[test]
    fn test_record_outcome() {
        let (storage, _temp) = create_test_storage();

        let record = storage.import(generated("Physics")).unwrap();
        let mut session = QuizSession::new(&record);
        session.answer_current(Answer::Bool { value: true });
        let outcome = session.finish();

        let updated = storage.record_outcome(record.id, &outcome).unwrap();
        assert_eq!(updated.score, Some(1));
        assert_eq!(updated.total, Some(1));
        assert_eq!(updated.percentage, Some(100.0));
        assert!(updated.is_completed());

        // Persisted, not just returned
        let reloaded = storage.get(record.id).unwrap();
        assert_eq!(reloaded.score, Some(1));
    }

    #[test]
    fn test_delete() {
        let (storage, _temp) = create_test_storage();

        let record = storage.import(generated("Gone")).unwrap();
        storage.delete(record.id).unwrap();

        assert!(matches!(
            storage.get(record.id),
            Err(StorageError::QuizNotFound(_))
        ));
        assert!(matches!(
            storage.delete(record.id),
            Err(StorageError::QuizNotFound(_))
        ));
    }

    #[test]
    fn test_import_rejects_empty_quiz() {
        let (storage, _temp) = create_test_storage();

        let result = storage.import(GeneratedQuiz {
            title: "Empty".to_string(),
            questions: Vec::new(),
            embedded_images: Vec::new(),
        });
        assert!(matches!(result, Err(StorageError::InvalidOperation(_))));
    }

    #[test]
    fn test_import_rejects_bad_correct_index() {
        let (storage, _temp) = create_test_storage();

        let result = storage.import(GeneratedQuiz {
            title: "Broken".to_string(),
            questions: vec![Question::MultipleChoice {
                prompt: "?".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                correct: 2,
                explanation: None,
            }],
            embedded_images: Vec::new(),
        });
        assert!(matches!(result, Err(StorageError::InvalidOperation(_))));
    }
}
