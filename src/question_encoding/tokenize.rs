use std::collections::{HashMap, HashSet};

use super::config::{TokenizerConfig, WordOrder};
use super::data::{VocabEntry, Vocabulary};

/// Split `text` into words: optionally lowercase it, treat every filter
/// character as a separator, split on `config.split` and drop empty pieces.
pub fn tokenize(text: &str, config: &TokenizerConfig) -> Vec<String> {
    let text = if config.lower { text.to_lowercase() } else { text.to_string() };
    let separated: String = text
        .chars()
        .map(|c| if config.filters.contains(c) { config.split } else { c })
        .collect();
    separated
        .split(config.split)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the vocabulary from the training questions. Indices start at 1.
pub fn fit_vocabulary<S: AsRef<str>>(questions: &[S], config: &TokenizerConfig) -> Vocabulary {
    let mut entries: Vec<VocabEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for question in questions {
        let mut seen_here = HashSet::new();
        for word in tokenize(question.as_ref(), config) {
            let position = *positions.entry(word.clone()).or_insert_with(|| {
                entries.push(VocabEntry {
                    word: word.clone(),
                    count: 0,
                    documents: 0,
                });
                entries.len() - 1
            });
            let entry = &mut entries[position];
            entry.count += 1;
            if seen_here.insert(word) {
                entry.documents += 1;
            }
        }
    }

    if config.order == WordOrder::Frequency {
        // stable, so ties keep first-seen order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
    }

    Vocabulary::from_entries(entries, questions.len())
}
