use std::collections::BTreeMap;

use ndarray::{Array1, Array2, Axis};

use super::config::{MatrixMode, TokenizerConfig};
use super::data::Vocabulary;
use super::tokenize::tokenize;

/// Encode one question as a bag-of-words vector of length `vocab.size()`.
/// Words the vocabulary does not know are skipped.
pub fn vectorize_one(question: &str, vocab: &Vocabulary, config: &TokenizerConfig) -> Array1<f32> {
    let mut vector = Array1::zeros(vocab.size());
    fill_row(question, vocab, config, vector.view_mut());
    vector
}

/// Encode every question; row `i` is the vector of `questions[i]`.
pub fn vectorize<S: AsRef<str>>(questions: &[S], vocab: &Vocabulary, config: &TokenizerConfig) -> Array2<f32> {
    let mut matrix = Array2::zeros((questions.len(), vocab.size()));
    for (row, question) in matrix.axis_iter_mut(Axis(0)).zip(questions) {
        fill_row(question.as_ref(), vocab, config, row);
    }
    matrix
}

fn fill_row(question: &str, vocab: &Vocabulary, config: &TokenizerConfig, mut row: ndarray::ArrayViewMut1<f32>) {
    let indices: Vec<usize> = tokenize(question, config)
        .iter()
        .filter_map(|word| vocab.index_of(word))
        .collect();
    if indices.is_empty() {
        return;
    }

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &index in &indices {
        *counts.entry(index).or_insert(0) += 1;
    }

    for (index, count) in counts {
        let count = count as f32;
        row[index] = match config.mode {
            MatrixMode::Binary => 1.0,
            MatrixMode::Count => count,
            MatrixMode::Freq => count / indices.len() as f32,
            MatrixMode::Tfidf => {
                let documents = vocab.entry(index).map_or(0, |entry| entry.documents);
                let tf = 1.0 + count.ln();
                let idf = (1.0 + vocab.document_count() as f32 / (1 + documents) as f32).ln();
                tf * idf
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use ndarray::array;

    use super::*;
    use crate::question_encoding::tokenize::fit_vocabulary;

    fn config(mode: MatrixMode) -> TokenizerConfig {
        TokenizerConfig {
            mode,
            ..TokenizerConfig::default()
        }
    }

    #[test]
    fn binary_marks_presence_and_skips_unknown_words() {
        let config = config(MatrixMode::Binary);
        let vocab = fit_vocabulary(&["is it red", "is it blue"], &config);
        let vector = vectorize_one("Is it green? is it?", &vocab, &config);
        assert_eq!(vector, array![0.0, 1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn reserved_slot_stays_zero() {
        let config = config(MatrixMode::Count);
        let vocab = fit_vocabulary(&["red blue"], &config);
        let matrix = vectorize(&["red red blue", "nothing known", ""], &vocab, &config);
        assert!(matrix.column(Vocabulary::RESERVED_INDEX).iter().all(|&v| v == 0.0));
        assert_eq!(matrix.row(0), array![0.0, 2.0, 1.0]);
        assert_eq!(matrix.row(1), array![0.0, 0.0, 0.0]);
    }

    #[test]
    fn freq_divides_by_known_word_count() {
        let config = config(MatrixMode::Freq);
        let vocab = fit_vocabulary(&["red blue"], &config);
        let vector = vectorize_one("red red blue green", &vocab, &config);
        assert!(approx_eq!(f32, vector[1], 2.0 / 3.0, ulps = 2));
        assert!(approx_eq!(f32, vector[2], 1.0 / 3.0, ulps = 2));
    }

    #[test]
    fn tfidf_weights_rare_words_higher() {
        let config = config(MatrixMode::Tfidf);
        let vocab = fit_vocabulary(&["is it red", "is it blue"], &config);
        let vector = vectorize_one("is red", &vocab, &config);
        let common = (1.0f32 + 2.0 / 3.0).ln();
        let rare = (1.0f32 + 2.0 / 2.0).ln();
        assert!(approx_eq!(f32, vector[1], common, ulps = 2));
        assert!(approx_eq!(f32, vector[3], rare, ulps = 2));
        assert!(vector[3] > vector[1]);
    }

    #[test]
    fn vectorize_is_deterministic() {
        let config = config(MatrixMode::Binary);
        let vocab = fit_vocabulary(&["what shape is this", "what color is the circle"], &config);
        let questions = ["what color is the shape?", "is this a circle"];
        let first = vectorize(&questions, &vocab, &config);
        let second = vectorize(&questions, &vocab, &config);
        assert_eq!(first, second);
        assert_eq!(first.row(1), vectorize_one(questions[1], &vocab, &config));
    }
}
