//! Command-line interface for vision-forge.
//!
//! Provides the `serve`, `prompt` and `models` commands.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli, Commands};
