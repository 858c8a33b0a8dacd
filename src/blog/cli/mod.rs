//! The `blog` command-line client.
//!
//! - `setup`: clap definitions
//! - `commands`: dispatch and per-command handlers
//! - `render`: terminal output

mod commands;
mod render;
mod setup;

pub use commands::run;
pub use setup::Cli;
