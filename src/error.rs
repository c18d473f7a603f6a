//! Error types for vision-forge operations.
//!
//! Defines error types for the major subsystems:
//! - Remote generative API interactions (text and image)
//! - Proxy configuration loading

use thiserror::Error;

/// Errors that can occur during generative API operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing API key: GEMINI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse model response: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Model response contained no usable content")]
    EmptyResponse,

    #[error("No image generated")]
    NoImage {
        /// Text the model returned instead of image bytes, when present.
        text: Option<String>,
    },

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LlmError {
    /// Message suitable for the `error` field of a failure response body.
    pub fn response_message(&self) -> String {
        match self {
            LlmError::NoImage { text: Some(text) } => text.clone(),
            other => other.to_string(),
        }
    }
}

/// Errors that can occur while loading proxy configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_code_and_message() {
        let err = LlmError::ApiError {
            code: 503,
            message: "model overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (503): model overloaded");
    }

    #[test]
    fn no_image_response_message_prefers_model_text() {
        let err = LlmError::NoImage {
            text: Some("I cannot draw that.".to_string()),
        };
        assert_eq!(err.response_message(), "I cannot draw that.");

        let bare = LlmError::NoImage { text: None };
        assert_eq!(bare.response_message(), "No image generated");
    }
}
