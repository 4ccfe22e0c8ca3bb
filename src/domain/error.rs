use std::io;

use thiserror::Error;

/// Library-wide error type for bandforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required environment variable is not set.
    #[error("{0} environment variable is not set")]
    EnvironmentVariableMissing(String),

    /// Completion or image-generation request failed.
    #[error("API request failed: {message}")]
    RequestFailed { message: String, status: Option<u16> },

    /// The generated image URL could not be downloaded.
    #[error("Failed to download generated image: {message}")]
    ImageFetch { message: String, status: Option<u16> },

    /// Band profile extraction failed.
    #[error(transparent)]
    ProfileParse(#[from] ProfileParseError),

    /// Discography extraction failed.
    #[error("Failed to parse discography: {0}")]
    DiscographyParse(String),

    /// Project directory could not be created.
    #[error("Failed to create project directory '{path}': {source}")]
    DirectoryCreate { path: String, source: io::Error },

    /// Output file could not be written.
    #[error("Failed to write '{path}': {source}")]
    FileWrite { path: String, source: io::Error },

    /// Page template rendering failed.
    #[error("Failed to render page template: {0}")]
    TemplateRender(#[from] minijinja::Error),
}

/// Failure extracting a `BandProfile` from a completion.
#[derive(Debug, Error)]
pub enum ProfileParseError {
    /// One or more required labels were absent from the text.
    #[error("Missing required profile fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// The reference-year field did not contain a parseable integer.
    #[error("Reference year '{0}' is not a valid integer")]
    InvalidReferenceYear(String),
}
