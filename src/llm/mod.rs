//! Generative API integration for vision-forge.
//!
//! This module provides the client for the Gemini-style generative language
//! API used for quote, question and image generation, behind a provider
//! trait so pipelines can be driven by stub implementations in tests.
//!
//! ```ignore
//! use vision_forge::llm::{GeminiClient, GenerativeProvider};
//!
//! let client = GeminiClient::from_env();
//! let text = client.generate_text("gemini-2.0-flash-exp", "Say hello").await?;
//! ```

pub mod gemini;

pub use gemini::{GeminiClient, InlineImage, ModelInfo, DEFAULT_API_BASE};

use async_trait::async_trait;

use crate::error::LlmError;

/// Trait for providers that can generate text and images.
///
/// Remote failures surface as [`LlmError`]; callers decide whether to
/// propagate or resolve through a fallback tier.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Generate free text for the given prompt.
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, LlmError>;

    /// Generate a single image for the given prompt.
    async fn generate_image(&self, model: &str, prompt: &str) -> Result<InlineImage, LlmError>;
}
