use ndarray::Array2;

use super::data::AnswerVocabulary;
use crate::error::Result;

/// Categorical index of every answer. Fails on the first answer that is not
/// in the vocabulary.
pub fn answer_indices<S: AsRef<str>>(answers: &[S], vocab: &AnswerVocabulary) -> Result<Vec<usize>> {
    answers
        .iter()
        .map(|answer| vocab.index_of(answer.as_ref()))
        .collect()
}

/// `(indices, num_classes)` matrix with a single 1 per row.
///
/// # Panics
///
/// If an index is not below `num_classes`.
pub(crate) fn one_hot(indices: &[usize], num_classes: usize) -> Array2<f32> {
    let mut encoded = Array2::zeros((indices.len(), num_classes));
    for (row, &index) in indices.iter().enumerate() {
        encoded[(row, index)] = 1.0;
    }
    encoded
}

/// One-hot rows sized to the whole answer vocabulary.
pub fn build_outputs<S: AsRef<str>>(answers: &[S], vocab: &AnswerVocabulary) -> Result<Array2<f32>> {
    let indices = answer_indices(answers, vocab)?;
    Ok(one_hot(&indices, vocab.len()))
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::error::PrepareError;

    fn vocab() -> AnswerVocabulary {
        AnswerVocabulary::new(vec!["yes".into(), "no".into(), "red".into()]).unwrap()
    }

    #[test]
    fn outputs_match_vocabulary_positions() {
        let outputs = build_outputs(&["yes", "red"], &vocab()).unwrap();
        assert_eq!(outputs, array![[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    }

    #[test]
    fn every_row_has_exactly_one_hot_entry() {
        let vocab = vocab();
        let answers = ["no", "red", "no", "yes"];
        let outputs = build_outputs(&answers, &vocab).unwrap();
        for (row, answer) in outputs.rows().into_iter().zip(answers) {
            assert_eq!(row.sum(), 1.0);
            assert_eq!(row[vocab.index_of(answer).unwrap()], 1.0);
        }
    }

    #[test]
    fn width_is_vocabulary_size_even_when_unused() {
        let outputs = build_outputs(&["yes"], &vocab()).unwrap();
        assert_eq!(outputs.dim(), (1, 3));
    }

    #[test]
    fn unknown_answer_aborts() {
        let err = build_outputs(&["yes", "purple"], &vocab()).unwrap_err();
        assert!(matches!(err, PrepareError::UnknownAnswer { answer } if answer == "purple"));
    }
}
