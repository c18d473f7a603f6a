//! Quote generation pipelines.
//!
//! Three surfaces: the themed quote list, the vision-anchored quote set
//! with language validation, and the per-goal quote map generated as a
//! concurrent batch with per-item fallback.

use std::collections::HashMap;

use futures::future::join_all;

use crate::config::ProxyConfig;
use crate::fallback;
use crate::llm::GenerativeProvider;
use crate::parse;
use crate::prompts::quotes::{
    build_fallback_quotes_prompt, build_goal_quote_prompt, build_themed_quotes_prompt,
    build_vision_quotes_prompt, quote_count, THEMED_QUOTE_COUNT,
};
use crate::prompts::types::{Goal, GoalId};
use crate::quality;

use super::Resolved;

/// Themed quote-list parses accept a couple more lines than requested.
const THEMED_PARSE_LIMIT: usize = 8;

/// Secondary tier shared by the quote pipelines: lenient generation with
/// an any-reasonable-line acceptance bar, then the minimal literals.
///
/// Never fails and never returns an empty list.
pub(crate) async fn lenient_quotes(
    provider: &dyn GenerativeProvider,
    config: &ProxyConfig,
    count: usize,
    context: &str,
) -> Vec<String> {
    let prompt = build_fallback_quotes_prompt(count, context);
    match provider.generate_text(&config.text_model, &prompt).await {
        Ok(text) => {
            let quotes = parse::split_quote_lines(&text, count);
            if quotes.is_empty() {
                fallback::minimal_quotes(count)
            } else {
                quotes
            }
        }
        Err(error) => {
            tracing::warn!(%error, "Lenient quote generation failed, using minimal defaults");
            fallback::minimal_quotes(count)
        }
    }
}

/// Generate the themed quote list for a vision type.
///
/// Primary: a fixed-count list parsed line by line. A primary remote error
/// resolves through lenient generation (context derived from the vision
/// type) and surfaces as [`Resolved::Fallback`].
pub async fn generate_themed_quotes(
    provider: &dyn GenerativeProvider,
    config: &ProxyConfig,
    vision_type: &str,
    goals: &[Goal],
) -> Resolved<Vec<String>> {
    let prompt = build_themed_quotes_prompt(vision_type, goals);
    let context = format!("{} and achieving goals", vision_type);

    match provider
        .generate_text(&config.themed_quote_model, &prompt)
        .await
    {
        Ok(text) => {
            let quotes = parse::split_quote_lines(&text, THEMED_PARSE_LIMIT);
            if quotes.is_empty() {
                tracing::warn!(vision_type, "Themed quote reply had no usable lines");
                Resolved::Generated(
                    lenient_quotes(provider, config, THEMED_QUOTE_COUNT, &context).await,
                )
            } else {
                Resolved::Generated(quotes)
            }
        }
        Err(error) => {
            tracing::error!(%error, vision_type, "Themed quote generation failed");
            let content = lenient_quotes(provider, config, THEMED_QUOTE_COUNT, &context).await;
            Resolved::Fallback {
                content,
                error: error.response_message(),
            }
        }
    }
}

/// Generate vision-anchored quotes with language and script validation.
///
/// The reply is parsed as keyed JSON first, then line-split leniently;
/// either way the batch passes per-item script validation and the
/// half-count rule. A rejected batch resolves to the static per-language
/// table (still [`Resolved::Generated`]: the remote call itself worked);
/// a remote error resolves to the same table as [`Resolved::Fallback`].
pub async fn generate_vision_quotes(
    provider: &dyn GenerativeProvider,
    config: &ProxyConfig,
    user_vision: &str,
    goals: &[Goal],
    languages: &[String],
) -> Resolved<Vec<String>> {
    let count = quote_count(goals);
    let prompt = build_vision_quotes_prompt(user_vision, goals, languages, count);

    match provider.generate_text(&config.text_model, &prompt).await {
        Ok(text) => {
            let parsed = parse::parse_keyed_quotes(&text, count)
                .unwrap_or_else(|| parse::split_loose_lines(&text, count));

            match quality::validate_batch(parsed, languages, count) {
                Ok(quotes) => Resolved::Generated(quotes),
                Err(rejection) => {
                    tracing::warn!(%rejection, ?languages, "Vision quote batch rejected");
                    Resolved::Generated(fallback::static_quotes(languages, count))
                }
            }
        }
        Err(error) => {
            tracing::error!(%error, "Vision quote generation failed");
            Resolved::Fallback {
                content: fallback::static_quotes(languages, count),
                error: error.response_message(),
            }
        }
    }
}

/// Generate one quote per goal as a concurrent batch.
///
/// All remote calls are issued at once and joined; an individual failure
/// resolves through lenient generation for that goal and finally the
/// per-goal literal, so the map always has exactly one entry per goal.
pub async fn generate_individual_quotes(
    provider: &dyn GenerativeProvider,
    config: &ProxyConfig,
    goals: &[Goal],
    user_vision: &str,
    vision_type: &str,
) -> HashMap<GoalId, String> {
    let tasks = goals.iter().map(|goal| async move {
        let prompt = build_goal_quote_prompt(goal, vision_type, user_vision);
        let quote = match provider.generate_text(&config.text_model, &prompt).await {
            Ok(text) => {
                let cleaned = parse::clean_single_quote(&text);
                if cleaned.is_empty() {
                    fallback::EMPTY_QUOTE_LITERAL.to_string()
                } else {
                    cleaned
                }
            }
            Err(error) => {
                tracing::warn!(%error, goal_id = %goal.id, "Goal quote generation failed");
                let context = format!("{} and success", goal.title);
                lenient_quotes(provider, config, 1, &context)
                    .await
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| fallback::GOAL_QUOTE_LITERAL.to_string())
            }
        };
        (goal.id.clone(), quote)
    });

    join_all(tasks).await.into_iter().collect()
}
