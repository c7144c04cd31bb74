use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use vqa_dataprep::config::PrepareConfig;
use vqa_dataprep::{PrepareError, Result};

#[derive(Debug, Clone, Default)]
#[derive(Serialize, Deserialize)]
pub struct PrepareWorkflowConfig {
    // easy-vqa data directory, `~` is expanded
    pub dataset_path: Option<String>,
    #[serde(flatten)]
    pub prepare: PrepareConfig,
}

impl PrepareWorkflowConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| PrepareError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| PrepareError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
