//! Per-endpoint request structs and handlers.
//!
//! Request bodies are typed at the boundary (camelCase field names match
//! the browser client); responses are shaped by the success/fallback
//! convention: 200 with `success:true` whenever content was produced
//! without a primary remote error, 500 with `success:false` plus a
//! populated fallback payload when the remote call itself failed. Callers
//! treat the presence of the content field as authoritative over the
//! status code.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use crate::error::LlmError;
use crate::pipeline::{self, Resolved};
use crate::prompts::types::Goal;

use super::AppContext;

/// A language selection: the client sends either a single name or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LanguageSelection {
    One(String),
    Many(Vec<String>),
}

impl LanguageSelection {
    /// Normalize to a non-empty ordered list, defaulting to English.
    pub fn normalize(selection: Option<Self>) -> Vec<String> {
        let languages = match selection {
            None => vec![],
            Some(LanguageSelection::One(name)) => vec![name],
            Some(LanguageSelection::Many(names)) => names,
        };
        let languages: Vec<String> =
            languages.into_iter().filter(|l| !l.is_empty()).collect();
        if languages.is_empty() {
            vec!["English".to_string()]
        } else {
            languages
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    #[serde(default = "default_size")]
    pub size: String,
}

fn default_size() -> String {
    "desktop".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuotesRequest {
    #[serde(default)]
    pub vision_type: String,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionQuotesRequest {
    #[serde(default)]
    pub user_vision: String,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub language: Option<LanguageSelection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualQuotesRequest {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub user_vision: String,
    #[serde(default)]
    pub vision_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsRequest {
    #[serde(default)]
    pub vision_type: String,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// Shape a list resolution into the 200/500 response convention. The
/// content field name varies per endpoint ("quotes" or "questions").
fn list_response(resolved: Resolved<Vec<String>>, field: &str) -> Response {
    let mut body = serde_json::Map::new();
    match resolved {
        Resolved::Generated(items) => {
            body.insert("success".to_string(), json!(true));
            body.insert(field.to_string(), json!(items));
            (StatusCode::OK, Json(serde_json::Value::Object(body))).into_response()
        }
        Resolved::Fallback { content, error } => {
            body.insert("success".to_string(), json!(false));
            body.insert("error".to_string(), json!(error));
            body.insert(field.to_string(), json!(content));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::Value::Object(body)),
            )
                .into_response()
        }
    }
}

pub async fn generate_image(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<GenerateImageRequest>,
) -> Response {
    let prompt = pipeline::with_size_guidance(&body.prompt, &body.size);

    match ctx
        .provider
        .generate_image(&ctx.config.image_model, &prompt)
        .await
    {
        Ok(image) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "image": image.data,
                "mimeType": image.mime_type,
            })),
        )
            .into_response(),
        // The model replied with prose instead of image bytes.
        Err(err @ LlmError::NoImage { .. }) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": err.response_message() })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "error": err.response_message() })),
        )
            .into_response(),
    }
}

pub async fn generate_quotes(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<GenerateQuotesRequest>,
) -> Response {
    let resolved = pipeline::generate_themed_quotes(
        ctx.provider.as_ref(),
        &ctx.config,
        &body.vision_type,
        &body.goals,
    )
    .await;
    list_response(resolved, "quotes")
}

pub async fn generate_vision_quotes(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<VisionQuotesRequest>,
) -> Response {
    let languages = LanguageSelection::normalize(body.language);
    let resolved = pipeline::generate_vision_quotes(
        ctx.provider.as_ref(),
        &ctx.config,
        &body.user_vision,
        &body.goals,
        &languages,
    )
    .await;
    list_response(resolved, "quotes")
}

pub async fn generate_individual_quotes(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<IndividualQuotesRequest>,
) -> Response {
    let quotes = pipeline::generate_individual_quotes(
        ctx.provider.as_ref(),
        &ctx.config,
        &body.goals,
        &body.user_vision,
        &body.vision_type,
    )
    .await;
    (
        StatusCode::OK,
        Json(json!({ "success": true, "quotes": quotes })),
    )
        .into_response()
}

pub async fn generate_questions(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<GenerateQuestionsRequest>,
) -> Response {
    let resolved = pipeline::generate_questions(
        ctx.provider.as_ref(),
        &ctx.config,
        &body.vision_type,
        &body.goals,
    )
    .await;
    list_response(resolved, "questions")
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "vision proxy server is running",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_selection_normalizes_string_and_list() {
        let one: LanguageSelection = serde_json::from_str("\"Marathi\"").unwrap();
        assert_eq!(LanguageSelection::normalize(Some(one)), vec!["Marathi"]);

        let many: LanguageSelection =
            serde_json::from_str("[\"English\", \"Hindi\"]").unwrap();
        assert_eq!(
            LanguageSelection::normalize(Some(many)),
            vec!["English", "Hindi"]
        );
    }

    #[test]
    fn test_language_selection_defaults_to_english() {
        assert_eq!(LanguageSelection::normalize(None), vec!["English"]);
        let empty: LanguageSelection = serde_json::from_str("[]").unwrap();
        assert_eq!(LanguageSelection::normalize(Some(empty)), vec!["English"]);
        let blank: LanguageSelection = serde_json::from_str("\"\"").unwrap();
        assert_eq!(LanguageSelection::normalize(Some(blank)), vec!["English"]);
    }

    #[test]
    fn test_vision_quotes_request_field_names() {
        let body: VisionQuotesRequest = serde_json::from_str(
            r#"{"userVision": "calm mornings", "goals": [{"id": 1, "title": "Inner Peace"}], "language": "Hindi"}"#,
        )
        .unwrap();
        assert_eq!(body.user_vision, "calm mornings");
        assert_eq!(body.goals.len(), 1);
        assert!(matches!(body.language, Some(LanguageSelection::One(_))));
    }

    #[test]
    fn test_image_request_defaults_size() {
        let body: GenerateImageRequest =
            serde_json::from_str(r#"{"prompt": "a lake"}"#).unwrap();
        assert_eq!(body.size, "desktop");
    }
}
