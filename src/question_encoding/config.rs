use serde::{Deserialize, Serialize};

pub const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

/// How vocabulary indices are handed out when fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordOrder {
    /// Order of first appearance across the corpus.
    FirstSeen,
    /// Most frequent first, first appearance breaking ties.
    Frequency,
}

/// Value written into each bag-of-words slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixMode {
    Binary,
    Count,
    Freq,
    Tfidf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Characters treated as separators in addition to `split`.
    pub filters: String,
    pub lower: bool,
    pub split: char,
    pub order: WordOrder,
    pub mode: MatrixMode,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            filters: String::from(DEFAULT_FILTERS),
            lower: true,
            split: ' ',
            order: WordOrder::FirstSeen,
            mode: MatrixMode::Binary,
        }
    }
}
