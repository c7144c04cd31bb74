pub mod error;
pub mod data;
pub mod config;
pub mod provider;
pub mod image_preprocess;
pub mod question_encoding;
pub mod answer_encoding;
pub mod prepare;

pub use error::{PrepareError, Result};
pub use image_preprocess::load::{load_image, load_image_set};
pub use question_encoding::tokenize::fit_vocabulary;
pub use question_encoding::vectorize::vectorize;
pub use answer_encoding::encode::build_outputs;
pub use prepare::{clear_cache, prepare, DatasetPreparer};
