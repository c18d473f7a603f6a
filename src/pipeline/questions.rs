//! Reflective-question generation pipeline.

use crate::config::ProxyConfig;
use crate::fallback;
use crate::llm::GenerativeProvider;
use crate::parse;
use crate::prompts::questions::{
    build_fallback_questions_prompt, build_questions_prompt, QUESTION_COUNT,
};
use crate::prompts::types::Goal;

use super::Resolved;

/// Secondary tier: lenient question generation, then the static literals.
async fn lenient_questions(
    provider: &dyn GenerativeProvider,
    config: &ProxyConfig,
    vision_type: &str,
) -> Vec<String> {
    let prompt = build_fallback_questions_prompt(QUESTION_COUNT, vision_type);
    match provider.generate_text(&config.text_model, &prompt).await {
        Ok(text) => {
            let questions = parse::split_question_lines(&text, QUESTION_COUNT);
            if questions.is_empty() {
                fallback::static_questions(QUESTION_COUNT)
            } else {
                questions
            }
        }
        Err(error) => {
            tracing::warn!(%error, "Lenient question generation failed, using literals");
            fallback::static_questions(QUESTION_COUNT)
        }
    }
}

/// Generate three reflective questions for a vision type and goal set.
///
/// Lines without a question mark are dropped at parse time; an empty parse
/// resolves through the lenient tier, a remote error additionally marks
/// the result as [`Resolved::Fallback`].
pub async fn generate_questions(
    provider: &dyn GenerativeProvider,
    config: &ProxyConfig,
    vision_type: &str,
    goals: &[Goal],
) -> Resolved<Vec<String>> {
    let prompt = build_questions_prompt(vision_type, goals);

    match provider.generate_text(&config.text_model, &prompt).await {
        Ok(text) => {
            let questions = parse::split_question_lines(&text, QUESTION_COUNT);
            if questions.is_empty() {
                tracing::warn!(vision_type, "Question reply had no question lines");
                Resolved::Generated(lenient_questions(provider, config, vision_type).await)
            } else {
                Resolved::Generated(questions)
            }
        }
        Err(error) => {
            tracing::error!(%error, vision_type, "Question generation failed");
            let content = lenient_questions(provider, config, vision_type).await;
            Resolved::Fallback {
                content,
                error: error.response_message(),
            }
        }
    }
}
