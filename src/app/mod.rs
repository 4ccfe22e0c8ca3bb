//! Application wiring: context, commands, and logging setup.

pub mod commands;
mod context;
pub mod logging;

pub use context::AppContext;
