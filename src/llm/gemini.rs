//! Client for the Google Generative Language API.
//!
//! Implements the `generateContent` call for text and image generation and
//! the `models` listing used by the diagnostic CLI. Wire structures follow
//! the v1beta JSON shapes; only the fields this service consumes are mapped.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::error::LlmError;

use super::GenerativeProvider;

/// Default base URL for the generative language API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Request timeout in seconds. Image generation is the slow path and can
/// take tens of seconds per call.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// A generated inline image: raw base64 payload plus its mime type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineImage {
    /// Base64-encoded image bytes, as returned by the API.
    pub data: String,
    /// Mime type of the payload (defaults to "image/png" when absent).
    pub mime_type: String,
}

impl InlineImage {
    /// Render as a browser-ready data URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Summary of a remote model, from the `models` listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Fully qualified model name (e.g. "models/gemini-2.0-flash-exp").
    pub name: String,
    /// Human-readable name, when the API provides one.
    pub display_name: Option<String>,
    /// Generation methods the model supports (e.g. "generateContent").
    pub supported_generation_methods: Vec<String>,
}

/// Client for the Gemini generative language API.
pub struct GeminiClient {
    /// Base URL for the API.
    api_base: String,
    /// API key; absent keys fail per call, not at construction.
    api_key: Option<String>,
    /// HTTP client for making API requests.
    http_client: Client,
}

impl GeminiClient {
    /// Create a new client with explicit configuration.
    ///
    /// # Arguments
    ///
    /// * `api_base` - Base URL for the API (no trailing slash)
    /// * `api_key` - API key, or `None` to defer the failure to call time
    pub fn new(api_base: String, api_key: Option<String>) -> Self {
        Self {
            api_base,
            api_key,
            http_client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Create a client from environment variables.
    ///
    /// Reads `GEMINI_API_KEY` (optional; calls fail with
    /// [`LlmError::MissingApiKey`] if absent) and `GEMINI_API_BASE`
    /// (optional, defaults to the public endpoint). Never fails: a missing
    /// key is a startup diagnostic, not a construction error.
    pub fn from_env() -> Self {
        let api_base =
            env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_key = env::var("GEMINI_API_KEY").ok();
        Self::new(api_base, api_key)
    }

    /// Get the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Check if an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Masked form of the API key, safe for logging.
    pub fn api_key_masked(&self) -> String {
        match &self.api_key {
            None => "<none>".to_string(),
            Some(key) if key.len() <= 8 => "*".repeat(key.len()),
            Some(key) => format!("{}...{}", &key[..4], &key[key.len() - 4..]),
        }
    }

    fn key(&self) -> Result<&str, LlmError> {
        self.api_key.as_deref().ok_or(LlmError::MissingApiKey)
    }

    /// List models available to this API key.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, LlmError> {
        let url = format!("{}/v1beta/models", self.api_base);
        let http_response = self
            .http_client
            .get(&url)
            .query(&[("key", self.key()?)])
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = http_response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), http_response).await);
        }

        let listing: ApiModelList = http_response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(format!("Failed to parse model listing: {}", e)))?;

        Ok(listing
            .models
            .into_iter()
            .map(|m| ModelInfo {
                name: m.name,
                display_name: m.display_name,
                supported_generation_methods: m.supported_generation_methods,
            })
            .collect())
    }

    /// Execute a `generateContent` call and return the parsed response.
    async fn generate_content(
        &self,
        model: &str,
        request: &ApiRequest,
    ) -> Result<ApiResponse, LlmError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.api_base, model);

        let http_response = self
            .http_client
            .post(&url)
            .query(&[("key", self.key()?)])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = http_response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), http_response).await);
        }

        http_response
            .json()
            .await
            .map_err(|e| LlmError::ParseError(format!("Failed to parse API response: {}", e)))
    }
}

/// Map a non-2xx response to an [`LlmError`], preferring the structured
/// error body when the API provides one.
async fn api_error(status_code: u16, response: reqwest::Response) -> LlmError {
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error response".to_string());

    if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
        if status_code == 429 {
            return LlmError::RateLimited(error_response.error.message);
        }
        return LlmError::ApiError {
            code: status_code,
            message: error_response.error.message,
        };
    }

    LlmError::ApiError {
        code: status_code,
        message: error_text,
    }
}

#[async_trait]
impl GenerativeProvider for GeminiClient {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let request = ApiRequest::text(prompt);
        let response = self.generate_content(model, &request).await?;

        let text = response.first_text();
        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        tracing::debug!(model, chars = text.len(), "Generated text response");
        Ok(text)
    }

    async fn generate_image(&self, model: &str, prompt: &str) -> Result<InlineImage, LlmError> {
        let request = ApiRequest::image(prompt);
        let response = self.generate_content(model, &request).await?;

        if let Some(inline) = response.first_inline_data() {
            let mime_type = inline
                .mime_type
                .clone()
                .unwrap_or_else(|| "image/png".to_string());
            tracing::debug!(model, mime_type, "Generated inline image");
            return Ok(InlineImage {
                data: inline.data.clone(),
                mime_type,
            });
        }

        // The model answered with prose instead of image bytes.
        let text = response.first_text();
        Err(LlmError::NoImage {
            text: if text.is_empty() { None } else { Some(text) },
        })
    }
}

/// Internal request structure for the generateContent endpoint.
#[derive(Debug, Serialize)]
struct ApiRequest {
    contents: Vec<ApiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<ApiGenerationConfig>,
}

impl ApiRequest {
    fn text(prompt: &str) -> Self {
        Self {
            contents: vec![ApiContent {
                parts: vec![ApiRequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: None,
        }
    }

    fn image(prompt: &str) -> Self {
        Self {
            contents: vec![ApiContent {
                parts: vec![ApiRequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(ApiGenerationConfig {
                response_modalities: vec!["image".to_string()],
            }),
        }
    }
}

/// Internal content block in a request.
#[derive(Debug, Serialize)]
struct ApiContent {
    parts: Vec<ApiRequestPart>,
}

/// Internal text part in a request.
#[derive(Debug, Serialize)]
struct ApiRequestPart {
    text: String,
}

/// Internal generation config carrying the response modality hint.
#[derive(Debug, Serialize)]
struct ApiGenerationConfig {
    #[serde(rename = "responseModalities")]
    response_modalities: Vec<String>,
}

/// Internal response structure from the generateContent endpoint.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

impl ApiResponse {
    /// Concatenated text parts of the first candidate; empty when none.
    fn first_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    /// First inline-data part of the first candidate, if any.
    fn first_inline_data(&self) -> Option<&ApiInlineData> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.iter().find_map(|p| p.inline_data.as_ref()))
    }
}

/// Internal candidate structure from the API response.
#[derive(Debug, Deserialize)]
struct ApiCandidate {
    content: Option<ApiCandidateContent>,
}

/// Internal content structure of a candidate.
#[derive(Debug, Deserialize)]
struct ApiCandidateContent {
    #[serde(default)]
    parts: Vec<ApiResponsePart>,
}

/// Internal part structure: text or inline image bytes.
#[derive(Debug, Deserialize)]
struct ApiResponsePart {
    text: Option<String>,
    #[serde(rename = "inlineData")]
    inline_data: Option<ApiInlineData>,
}

/// Internal inline-data structure carrying base64 image bytes.
#[derive(Debug, Deserialize)]
struct ApiInlineData {
    #[serde(rename = "mimeType")]
    mime_type: Option<String>,
    data: String,
}

/// Error response from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

/// Error detail from the API.
#[derive(Debug, Deserialize)]
#[allow(dead_code)] // Fields kept for complete API error deserialization
struct ApiErrorDetail {
    message: String,
    code: Option<u16>,
    status: Option<String>,
}

/// Internal model listing structure.
#[derive(Debug, Deserialize)]
struct ApiModelList {
    #[serde(default)]
    models: Vec<ApiModel>,
}

/// Internal model entry from the listing.
#[derive(Debug, Deserialize)]
struct ApiModel {
    name: String,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    #[serde(rename = "supportedGenerationMethods", default)]
    supported_generation_methods: Vec<String>,
}
