//! Project output store port definition.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Name of the band photo file inside a project directory.
pub const PHOTO_FILENAME: &str = "band_photo.jpg";

/// Name of the rendered page file inside a project directory.
pub const PAGE_FILENAME: &str = "home.html";

/// Port for writing a run's output: a fresh project directory holding the
/// band photo and the rendered page.
pub trait ProjectStore {
    /// Create a uniquely named directory for the band and return its path.
    fn create_project_dir(&self, band_name: &str) -> Result<PathBuf, AppError>;

    /// Write the fetched image bytes to [`PHOTO_FILENAME`] in the directory.
    fn write_photo(&self, dir: &Path, bytes: &[u8]) -> Result<PathBuf, AppError>;

    /// Write the rendered HTML to [`PAGE_FILENAME`] in the directory.
    fn write_page(&self, dir: &Path, html: &str) -> Result<PathBuf, AppError>;
}
