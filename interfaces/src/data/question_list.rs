use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum QuestionListError {
    #[error("Failed to read question list {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Question list is not a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Question list is empty")]
    Empty,
}

/// Candidate chat prompts. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionList(Vec<String>);

impl QuestionList {
    pub fn new(questions: Vec<String>) -> Result<Self, QuestionListError> {
        if questions.is_empty() {
            return Err(QuestionListError::Empty);
        }
        Ok(Self(questions))
    }

    pub fn from_json(json: &str) -> Result<Self, QuestionListError> {
        let questions: Vec<String> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuestionListError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| QuestionListError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let list = Self::from_json(&json)?;
        log::debug!("Loaded {} questions from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Picks one question uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.gen_range(0..self.0.len())]
    }
}
