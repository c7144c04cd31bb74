use serde::{Deserialize, Serialize};

pub use crate::image_preprocess::config::{ColorMode, ImageLoadConfig};
pub use crate::question_encoding::config::{MatrixMode, TokenizerConfig, WordOrder};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareConfig {
    pub tokenizer: TokenizerConfig,
    pub image: ImageLoadConfig,
}
