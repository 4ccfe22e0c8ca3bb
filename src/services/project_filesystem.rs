//! Filesystem-backed project output store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::AppError;
use crate::ports::{PAGE_FILENAME, PHOTO_FILENAME, ProjectStore};

/// Writes project output under a root directory (the current working
/// directory in production runs).
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

/// Derive a directory name from the band name: each whitespace-separated
/// word with its first letter uppercased and the rest lowercased, no
/// separators.
pub fn project_directory_name(band_name: &str) -> String {
    band_name.split_whitespace().map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn create_project_dir(&self, band_name: &str) -> Result<PathBuf, AppError> {
        let base = project_directory_name(band_name);

        let mut candidate = base.clone();
        let mut counter = 1;
        while self.root.join(&candidate).exists() {
            candidate = format!("{}{}", base, counter);
            counter += 1;
        }

        let dir = self.root.join(&candidate);
        fs::create_dir_all(&dir).map_err(|source| AppError::DirectoryCreate {
            path: dir.display().to_string(),
            source,
        })?;

        info!("Created project directory '{}'", dir.display());
        Ok(dir)
    }

    fn write_photo(&self, dir: &Path, bytes: &[u8]) -> Result<PathBuf, AppError> {
        let path = dir.join(PHOTO_FILENAME);
        fs::write(&path, bytes).map_err(|source| AppError::FileWrite {
            path: path.display().to_string(),
            source,
        })?;

        info!("Image saved to '{}'", path.display());
        Ok(path)
    }

    fn write_page(&self, dir: &Path, html: &str) -> Result<PathBuf, AppError> {
        let path = dir.join(PAGE_FILENAME);
        fs::write(&path, html).map_err(|source| AppError::FileWrite {
            path: path.display().to_string(),
            source,
        })?;

        info!("Page saved to '{}'", path.display());
        Ok(path)
    }
}
