#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// Builds an easy-vqa style directory inside a temp dir.
pub struct DatasetDir {
    dir: TempDir,
}

impl DatasetDir {
    pub fn new(answers: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        for split in ["train", "test"] {
            fs::create_dir_all(dir.path().join(split).join("images")).unwrap();
        }
        fs::write(dir.path().join("answers.txt"), answers.join("\n")).unwrap();
        DatasetDir { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn questions(&self, split: &str, questions: &[(&str, &str, u64)]) -> &Self {
        let json = serde_json::to_string(questions).unwrap();
        fs::write(self.path().join(split).join("questions.json"), json).unwrap();
        self
    }

    pub fn solid_image(&self, split: &str, id: u64, size: (u32, u32), color: [u8; 3]) -> PathBuf {
        let path = self.path().join(split).join("images").join(format!("{}.png", id));
        RgbImage::from_pixel(size.0, size.1, Rgb(color)).save(&path).unwrap();
        path
    }
}
