//! Adapters and stage services: HTTP client, prompt builders, page
//! renderer, and the filesystem output store.

mod openai_client_http;
pub mod page_renderer;
pub mod prompt_builder;
mod project_filesystem;

pub use openai_client_http::HttpOpenAiClient;
pub use page_renderer::render_page;
pub use project_filesystem::{FilesystemProjectStore, project_directory_name};
