//! Port definitions for external effects: API calls and filesystem output.

mod completion_client;
mod project_store;

pub use completion_client::{CompletionClient, MOCK_IMAGE_BYTES, MockCompletionClient};
pub use project_store::{PAGE_FILENAME, PHOTO_FILENAME, ProjectStore};
