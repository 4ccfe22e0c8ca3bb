//! Application context bundling the run's external dependencies.

use crate::ports::{CompletionClient, ProjectStore};

/// Explicit dependency bundle handed to command execution.
#[derive(Debug)]
pub struct AppContext<C: CompletionClient, S: ProjectStore> {
    pub client: C,
    pub store: S,
}

impl<C: CompletionClient, S: ProjectStore> AppContext<C, S> {
    pub fn new(client: C, store: S) -> Self {
        Self { client, store }
    }
}
