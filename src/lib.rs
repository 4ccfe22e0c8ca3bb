//! bandforge: fabricate a fictional band via LLM text and image APIs and
//! render a static HTML fan page into a per-run project directory.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use app::AppContext;
use app::commands::generate;
use services::{FilesystemProjectStore, HttpOpenAiClient};

pub use app::commands::generate::{GenerateOptions, GenerateResult};
pub use domain::{AppError, OpenAiConfig};

/// Initialize logging to `logs/execution.log` under the given directory.
pub fn init_logging(base_dir: &Path) -> Result<(), AppError> {
    app::logging::init(base_dir)
}

/// Run a full generation against the live APIs.
///
/// Reads `OPENAI_API_KEY` from the environment and writes the project
/// directory under the current working directory.
pub fn generate(options: &GenerateOptions) -> Result<GenerateResult, AppError> {
    let client = HttpOpenAiClient::from_env(OpenAiConfig::default())?;
    let store = FilesystemProjectStore::current()?;
    let ctx = AppContext::new(client, store);

    generate::execute(&ctx, options)
}

/// Run the pipeline offline with scripted completions and a placeholder
/// photo. No network access and no credential required.
pub fn generate_dry_run(options: &GenerateOptions) -> Result<GenerateResult, AppError> {
    let client = ports::MockCompletionClient::canned();
    let store = FilesystemProjectStore::current()?;
    let ctx = AppContext::new(client, store);

    generate::execute(&ctx, options)
}
