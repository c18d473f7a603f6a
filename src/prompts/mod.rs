//! Prompt construction for vision-board generation.
//!
//! This module turns structured request data (goals, vision text,
//! languages, theme, timeline) into natural-language instruction strings
//! for the text and image models. Builders are deterministic, pure string
//! composition: identical inputs produce byte-identical prompts, absent or
//! unknown inputs degrade to generic wording, and nothing in here can
//! fail.
//!
//! # Architecture
//!
//! - [`tables`] - Fixed theme/goal/timeline/size lookup tables
//! - [`language`] - Language registry and per-cardinality instructions
//! - [`quotes`] - Quote prompts (themed list, keyed JSON, per-goal, lenient)
//! - [`questions`] - Reflective-question prompts
//! - [`board`] - Collage and per-goal image prompts
//! - [`types`] - Goal records shared across the crate
//!
//! Because the remote model is instruction-following but not guaranteed
//! compliant, builders over-specify intent (explicit inclusion and
//! exclusion rules, worked examples) to raise the odds that the response
//! parser accepts the output without invoking fallback.

pub mod board;
pub mod language;
pub mod questions;
pub mod quotes;
pub mod tables;
pub mod types;

pub use board::{build_board_prompt, build_goal_prompts, DEFAULT_GOAL_QUOTES};
pub use language::{expected_script, language_spec, LanguageSpec, Script, LANGUAGES};
pub use questions::{build_fallback_questions_prompt, build_questions_prompt, QUESTION_COUNT};
pub use quotes::{
    build_fallback_quotes_prompt, build_goal_quote_prompt, build_themed_quotes_prompt,
    build_vision_quotes_prompt, quote_count, THEMED_QUOTE_COUNT,
};
pub use tables::{goal_phrase, size_guidance, theme_phrase, timeline_phrase};
pub use types::{Goal, GoalId, GoalPrompt};
