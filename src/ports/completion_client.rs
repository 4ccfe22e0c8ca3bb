//! Completion client port definition.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;

/// Port for the text-completion and image-generation APIs.
///
/// Both calls block until the response arrives; failures propagate
/// immediately with no retry.
pub trait CompletionClient {
    /// Send a prompt to the text-completion endpoint and return the raw
    /// completion text.
    fn complete(&self, prompt: &str) -> Result<String, AppError>;

    /// Send an image prompt to the image-generation endpoint and return the
    /// raw bytes of the generated image.
    fn generate_image(&self, prompt: &str) -> Result<Vec<u8>, AppError>;
}

/// Placeholder bytes the mock client returns in place of a real photo.
pub const MOCK_IMAGE_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0bandforge-mock-photo\xFF\xD9";

/// Scripted client for testing and dry runs without API calls.
///
/// Completions are served in order from a fixed queue; running past the end
/// is reported as a request failure.
#[derive(Debug, Default)]
pub struct MockCompletionClient {
    responses: RefCell<VecDeque<String>>,
}

impl MockCompletionClient {
    /// Script the exact completions to serve, in order.
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: RefCell::new(responses.into_iter().map(Into::into).collect()),
        }
    }

    /// Canned profile, backstory, and discography completions that exercise
    /// the whole extraction pipeline offline.
    pub fn canned() -> Self {
        Self::scripted([CANNED_PROFILE, CANNED_BACKSTORY, CANNED_DISCOGRAPHY])
    }
}

impl CompletionClient for MockCompletionClient {
    fn complete(&self, _prompt: &str) -> Result<String, AppError> {
        self.responses.borrow_mut().pop_front().ok_or_else(|| AppError::RequestFailed {
            message: "mock client has no scripted response left".to_string(),
            status: None,
        })
    }

    fn generate_image(&self, _prompt: &str) -> Result<Vec<u8>, AppError> {
        Ok(MOCK_IMAGE_BYTES.to_vec())
    }
}

const CANNED_PROFILE: &str = "Band Name: The Paper Satellites\n\
                              Author Style: Lester Bangs\n\
                              Nationality: Canadian\n\
                              Genre 1: Indie\n\
                              Genre 2: Folk\n\
                              Style Name: Melancholic\n\
                              Reference Year: 1994";

const CANNED_BACKSTORY: &str = r#"The Paper Satellites drifted out of a Montreal basement in 1994, all wool sweaters and broken amplifiers. Mara "Compass" Delorme on vocals carried the early shows, while Theo "Wires" Bastien with bass guitar held the low end together. Their first winter tour nearly ended the band; instead it gave them their sound."#;

const CANNED_DISCOGRAPHY: &str = "Winter Signal\n1. Frost Line\n2. Paper Moons\n3. Basement Light\n\nSecond Orbit\n1. Return Path\n2. Quiet Engines\n3. Falling Slowly";
