use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabEntry {
    pub word: String,
    /// Occurrences across the fitting corpus.
    pub count: usize,
    /// Number of fitting questions the word occurs in.
    pub documents: usize,
}

/// Word-to-index mapping fitted on the training questions.
///
/// Index [`Vocabulary::RESERVED_INDEX`] is never assigned to a word, so words
/// occupy `1..size()` and every bag-of-words vector has a slot 0 that stays
/// zero. The mapping cannot change once fitted: questions encoded later only
/// see the words known at fit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    #[serde(skip)]
    word_index: HashMap<String, usize>,
    // entries[i] holds index i + 1
    entries: Vec<VocabEntry>,
    document_count: usize,
}

impl Vocabulary {
    pub const RESERVED_INDEX: usize = 0;

    pub(crate) fn from_entries(entries: Vec<VocabEntry>, document_count: usize) -> Self {
        let word_index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.word.clone(), i + 1))
            .collect();
        Vocabulary {
            word_index,
            entries,
            document_count,
        }
    }

    /// Length of a bag-of-words vector: distinct words plus the reserved slot.
    pub fn size(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn num_words(&self) -> usize {
        self.entries.len()
    }

    /// Number of questions the vocabulary was fitted on.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.word_index.get(word).copied()
    }

    pub fn entry(&self, index: usize) -> Option<&VocabEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.entry(index).map(|entry| entry.word.as_str())
    }

    /// `(index, word)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i + 1, entry.word.as_str()))
    }
}
