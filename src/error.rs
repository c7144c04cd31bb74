use std::path::PathBuf;

use crate::data::{ImageId, ImageShape, Split};

pub type Result<T> = std::result::Result<T, PrepareError>;

#[derive(Debug, thiserror::Error)]
pub enum PrepareError {
    #[error("failed to decode image {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("answer {answer:?} is not in the answer vocabulary")]
    UnknownAnswer { answer: String },

    #[error("answer {answer:?} appears more than once in the answer vocabulary")]
    DuplicateAnswer { answer: String },

    #[error("question references image {image_id}, which is not in the {split} image set")]
    MissingImage { split: Split, image_id: ImageId },

    #[error("{split} image {image_id} has shape {found}, expected {expected}")]
    ShapeMismatch {
        split: Split,
        image_id: ImageId,
        expected: ImageShape,
        found: ImageShape,
    },

    #[error("{split} split has no images")]
    EmptySplit { split: Split },

    #[error("image file name {path} is not an integer image id")]
    InvalidImageName { path: PathBuf },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
