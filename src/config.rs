//! Proxy configuration loaded from the environment.
//!
//! Everything the server needs at startup: listen port, remote API base
//! and credential, per-task model names, and the allowed CORS origins.
//! A missing API key is a startup diagnostic, not a fatal error; only a
//! malformed numeric value fails loading.

use std::env;

use crate::error::ConfigError;

/// Default listen port for the proxy.
pub const DEFAULT_PORT: u16 = 3002;

/// Default model for vision quotes, individual quotes and questions.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash-exp";

/// Default model for the themed quote list.
pub const DEFAULT_THEMED_QUOTE_MODEL: &str = "gemini-1.5-flash";

/// Default model for image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-001";

/// Origins allowed by the CORS layer in addition to local dev servers.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:3000",
    "https://imagegenerator-sigma-three.vercel.app",
];

/// Configuration for the vision-board proxy server.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Port to bind on `0.0.0.0`.
    pub port: u16,
    /// Remote API base URL, no trailing slash.
    pub api_base: Option<String>,
    /// Remote API credential; absence is logged, not fatal.
    pub api_key: Option<String>,
    /// Model used for vision quotes, per-goal quotes and questions.
    pub text_model: String,
    /// Model used for the themed quote list.
    pub themed_quote_model: String,
    /// Model used for image generation.
    pub image_model: String,
    /// Allowed CORS origins.
    pub allowed_origins: Vec<String>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base: None,
            api_key: None,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            themed_quote_model: DEFAULT_THEMED_QUOTE_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

impl ProxyConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `PORT`, `GEMINI_API_KEY` and `GEMINI_API_BASE`; anything
    /// absent keeps its compiled default. A non-numeric `PORT` is the one
    /// value that fails loading.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(port) = env::var("PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("expected a port number, got '{}'", port),
            })?;
        }
        config.api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        config.api_base = env::var("GEMINI_API_BASE").ok().filter(|b| !b.is_empty());

        Ok(config)
    }

    /// Log the credential diagnostic the way operators expect at startup:
    /// presence, length and masked ends, never the key itself.
    pub fn log_credential_diagnostic(&self) {
        match &self.api_key {
            Some(key) => {
                let masked = if key.len() <= 8 {
                    "*".repeat(key.len())
                } else {
                    format!("{}...{}", &key[..4], &key[key.len() - 4..])
                };
                tracing::info!(length = key.len(), key = %masked, "API key loaded");
            }
            None => {
                tracing::error!("GEMINI_API_KEY is missing; generation calls will fail");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.port, 3002);
        assert_eq!(config.text_model, "gemini-2.0-flash-exp");
        assert_eq!(config.themed_quote_model, "gemini-1.5-flash");
        assert_eq!(config.image_model, "imagen-3.0-generate-001");
        assert!(config.api_key.is_none());
        assert!(config
            .allowed_origins
            .iter()
            .any(|o| o == "http://localhost:5173"));
    }

    #[test]
    fn test_invalid_port_error_shape() {
        let err = ConfigError::InvalidValue {
            key: "PORT".to_string(),
            message: "expected a port number, got 'abc'".to_string(),
        };
        assert!(err.to_string().contains("PORT"));
        assert!(err.to_string().contains("abc"));
    }
}
