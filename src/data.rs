use std::fmt;

use ndarray::{Array2, Array4};
use serde::{Deserialize, Serialize};

pub use crate::image_preprocess::data::{ImageSet, ImageTensor};
pub use crate::question_encoding::data::Vocabulary;
pub use crate::answer_encoding::data::AnswerVocabulary;

/// Opaque key linking a question to the image it is asked about.
pub type ImageId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub fn name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub text: String,
    pub answer: String,
    pub image_id: ImageId,
}

// easy-vqa stores each question as a `[text, answer, image_id]` triple.
#[derive(Deserialize)]
pub(crate) struct RawQuestion(String, String, ImageId);

impl From<RawQuestion> for QuestionRecord {
    fn from(raw: RawQuestion) -> Self {
        QuestionRecord {
            text: raw.0,
            answer: raw.1,
            image_id: raw.2,
        }
    }
}

/// Height x width x channels of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageShape {
    pub height: usize,
    pub width: usize,
    pub channels: usize,
}

impl ImageShape {
    pub fn of(image: &ImageTensor) -> Self {
        let (height, width, channels) = image.dim();
        ImageShape { height, width, channels }
    }

    pub fn dim(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels)
    }
}

impl fmt::Display for ImageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.height, self.width, self.channels)
    }
}

/// Everything the training and analysis scripts consume.
///
/// Row `i` of every per-split array describes question `i` of that split, in
/// the order the provider returned the questions.
#[derive(Debug, Clone)]
pub struct DatasetBundle {
    /// `(questions, height, width, channels)`, values in `[-0.5, 0.5]`.
    pub train_images: Array4<f32>,
    /// `(questions, vocab_size)` bag-of-words rows.
    pub train_question_vectors: Array2<f32>,
    /// `(questions, answer_count)` one-hot rows.
    pub train_answers: Array2<f32>,
    pub test_images: Array4<f32>,
    pub test_question_vectors: Array2<f32>,
    pub test_answers: Array2<f32>,
    pub image_shape: ImageShape,
    pub vocab_size: usize,
    pub answer_count: usize,
    pub answer_vocabulary: AnswerVocabulary,
    pub raw_test_questions: Vec<String>,
    pub test_answer_indices: Vec<usize>,
    pub vocabulary: Vocabulary,
}

impl DatasetBundle {
    pub fn summary(&self) -> BundleSummary {
        BundleSummary {
            train_questions: self.train_question_vectors.nrows(),
            test_questions: self.test_question_vectors.nrows(),
            image_shape: self.image_shape,
            vocab_size: self.vocab_size,
            answer_count: self.answer_count,
            answers: self.answer_vocabulary.answers().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleSummary {
    pub train_questions: usize,
    pub test_questions: usize,
    pub image_shape: ImageShape,
    pub vocab_size: usize,
    pub answer_count: usize,
    pub answers: Vec<String>,
}
