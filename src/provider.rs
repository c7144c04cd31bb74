use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::data::{ImageId, QuestionRecord, RawQuestion, Split};
use crate::error::{PrepareError, Result};

/// Source of raw questions, answers and image locations.
///
/// Every image id a question refers to must be a key of that split's
/// `image_paths`, and every answer must appear in `answers`.
pub trait DatasetProvider {
    fn questions(&self, split: Split) -> Result<Vec<QuestionRecord>>;

    /// Global answer list, in categorical-index order.
    fn answers(&self) -> Result<Vec<String>>;

    fn image_paths(&self, split: Split) -> Result<BTreeMap<ImageId, PathBuf>>;
}

/// An easy-vqa data directory:
///
/// ```text
/// <root>/answers.txt
/// <root>/train/questions.json
/// <root>/train/images/<id>.png
/// <root>/test/questions.json
/// <root>/test/images/<id>.png
/// ```
#[derive(Debug, Clone)]
pub struct EasyVqaDirectory {
    root: PathBuf,
}

impl EasyVqaDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        EasyVqaDirectory { root: root.into() }
    }

    fn split_dir(&self, split: Split) -> PathBuf {
        self.root.join(split.name())
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> PrepareError + '_ {
    move |source| PrepareError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl DatasetProvider for EasyVqaDirectory {
    fn questions(&self, split: Split) -> Result<Vec<QuestionRecord>> {
        let json_path = self.split_dir(split).join("questions.json");
        let file = File::open(&json_path).map_err(io_error(&json_path))?;
        let reader = BufReader::new(file);
        let raw: Vec<RawQuestion> = serde_json::from_reader(reader).map_err(|source| PrepareError::Json {
            path: json_path.clone(),
            source,
        })?;
        Ok(raw.into_iter().map(QuestionRecord::from).collect())
    }

    fn answers(&self) -> Result<Vec<String>> {
        let path = self.root.join("answers.txt");
        let content = fs::read_to_string(&path).map_err(io_error(&path))?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn image_paths(&self, split: Split) -> Result<BTreeMap<ImageId, PathBuf>> {
        let image_dir = self.split_dir(split).join("images");
        let mut paths = BTreeMap::new();
        for entry in fs::read_dir(&image_dir).map_err(io_error(&image_dir))? {
            let path = entry.map_err(io_error(&image_dir))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("png") {
                continue;
            }
            let image_id = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| stem.parse::<ImageId>().ok())
                .ok_or_else(|| PrepareError::InvalidImageName { path: path.clone() })?;
            paths.insert(image_id, path);
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn reads_question_triples() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("train/questions.json"),
            r#"[["what shape is this?", "circle", 0], ["what color is the shape?", "red", 3]]"#,
        );
        let provider = EasyVqaDirectory::new(dir.path());
        let questions = provider.questions(Split::Train).unwrap();
        assert_eq!(
            questions[1],
            QuestionRecord {
                text: "what color is the shape?".into(),
                answer: "red".into(),
                image_id: 3,
            }
        );
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn answers_are_trimmed_and_blank_lines_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("answers.txt"), "circle\r\nred \n\nyes\n");
        let provider = EasyVqaDirectory::new(dir.path());
        assert_eq!(provider.answers().unwrap(), vec!["circle", "red", "yes"]);
    }

    #[test]
    fn image_paths_keyed_by_numeric_stem() {
        let dir = tempfile::tempdir().unwrap();
        let images = dir.path().join("test/images");
        write(&images.join("10.png"), "");
        write(&images.join("2.png"), "");
        write(&images.join("notes.txt"), "");
        let provider = EasyVqaDirectory::new(dir.path());
        let paths = provider.image_paths(Split::Test).unwrap();
        assert_eq!(paths.keys().copied().collect::<Vec<_>>(), vec![2, 10]);
        assert_eq!(paths[&10], images.join("10.png"));
    }

    #[test]
    fn non_numeric_png_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("train/images/cover.png"), "");
        let provider = EasyVqaDirectory::new(dir.path());
        assert!(matches!(
            provider.image_paths(Split::Train),
            Err(PrepareError::InvalidImageName { .. })
        ));
    }

    #[test]
    fn missing_questions_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = EasyVqaDirectory::new(dir.path());
        assert!(matches!(provider.questions(Split::Test), Err(PrepareError::Io { .. })));
    }

    #[test]
    fn malformed_questions_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("test/questions.json"), r#"[["only text"]]"#);
        let provider = EasyVqaDirectory::new(dir.path());
        assert!(matches!(provider.questions(Split::Test), Err(PrepareError::Json { .. })));
    }
}
