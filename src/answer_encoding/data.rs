use std::collections::HashMap;

use serde::Serialize;

use crate::error::{PrepareError, Result};

/// The closed, ordered set of possible answers shared by both splits. An
/// answer's position is its categorical index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerVocabulary {
    answers: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl AnswerVocabulary {
    pub fn new(answers: Vec<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(answers.len());
        for (position, answer) in answers.iter().enumerate() {
            if index.insert(answer.clone(), position).is_some() {
                return Err(PrepareError::DuplicateAnswer {
                    answer: answer.clone(),
                });
            }
        }
        Ok(AnswerVocabulary { answers, index })
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Exact-match lookup.
    pub fn index_of(&self, answer: &str) -> Result<usize> {
        self.index
            .get(answer)
            .copied()
            .ok_or_else(|| PrepareError::UnknownAnswer {
                answer: answer.to_string(),
            })
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).map(String::as_str)
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }
}
