//! vision-forge: generation proxy for vision-board content.
//!
//! This library turns structured vision-board requests (goals, vision
//! text, languages, theme, timeline) into prompts for a Gemini-style
//! generative API, validates and cleans the model's free-text replies,
//! and substitutes fallback content whenever generation or validation
//! fails. An axum HTTP surface exposes one endpoint per generation task.

pub mod cli;
pub mod config;
pub mod error;
pub mod fallback;
pub mod llm;
pub mod parse;
pub mod pipeline;
pub mod prompts;
pub mod quality;
pub mod server;

// Re-export commonly used error types
pub use error::{ConfigError, LlmError};
