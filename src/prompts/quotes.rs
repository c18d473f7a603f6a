//! Quote prompt construction.
//!
//! Four builders cover the quote-generation surface: the themed list, the
//! vision-anchored keyed JSON request, the single-goal quote, and the
//! lenient prompt used by the secondary fallback tier. All are pure string
//! composition; absent inputs degrade to generic wording.

use super::language;
use super::types::Goal;

/// Number of quotes the themed list prompt asks for.
pub const THEMED_QUOTE_COUNT: usize = 6;

/// Derived item count: one per goal, never less than one.
pub fn quote_count(goals: &[Goal]) -> usize {
    goals.len().max(1)
}

/// Joined non-empty goal titles, with a generic default for empty lists.
fn goal_titles(goals: &[Goal], default: &str) -> String {
    let titles: Vec<&str> = goals
        .iter()
        .map(|g| g.title.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    if titles.is_empty() {
        default.to_string()
    } else {
        titles.join(", ")
    }
}

/// Themed quote-list prompt: a fixed count of short quotes for the vision
/// type, one per line and free of numbering so the line parser can accept
/// them directly.
pub fn build_themed_quotes_prompt(vision_type: &str, goals: &[Goal]) -> String {
    format!(
        r#"Generate exactly {count} short, powerful inspirational quotes for a vision board about "{vision_type}" with goals like: {titles}.

Requirements:
- Each quote should be maximum 10 words
- Make them motivational and positive
- Related to achieving dreams and goals
- Do NOT include author names
- Return ONLY the quotes, one per line
- No numbering, no bullet points, no quote marks

Example format:
Your dreams are worth the effort
Success begins with believing in yourself
Every day brings new opportunities"#,
        count = THEMED_QUOTE_COUNT,
        titles = goal_titles(goals, "success and happiness"),
    )
}

/// Vision quote prompt: requests a JSON object keyed `quote1..quoteN` with
/// explicit language, script, rejection and acceptance rules so the strict
/// parser/validator has the best odds of accepting the reply.
pub fn build_vision_quotes_prompt(
    user_vision: &str,
    goals: &[Goal],
    languages: &[String],
    count: usize,
) -> String {
    let langs_string = languages.join(", ");
    let json_structure = (1..=count)
        .map(|i| format!("  \"quote{}\": \"Quote string\"", i))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r#"You are generating inspirational quotes for a vision board. Follow these instructions EXACTLY.

User's Vision:
{user_vision}

Goals: {titles}

CRITICAL LANGUAGE REQUIREMENTS (MANDATORY)

SELECTED LANGUAGE: {langs_string}

{language_rule}
{script_rule}

DO NOT GENERATE:
{rejections}

ONLY GENERATE:
{acceptances}

VALIDATION CHECKLIST (check each quote):
1. Is this quote in {langs_string}? If NO, reject it.
2. Does this quote use the correct script? If NO, reject it.
3. Does this quote contain ANY words from other languages? If YES, reject it.
4. Generate a replacement quote that meets ALL criteria.

Format Requirements:
- Return valid JSON format ONLY
- Each quote: 3-8 words maximum
- Generate {count} unique quotes
- All quotes must be motivational and relevant

Required JSON Structure:
{{
{json_structure}
}}

FINAL REMINDER: Every single quote MUST be in {langs_string} ONLY. No exceptions."#,
        titles = goal_titles(goals, ""),
        language_rule = language::language_rule(languages, count),
        script_rule = language::script_rule(languages),
        rejections = language::rejection_rules(languages),
        acceptances = language::acceptance_rules(languages),
    )
}

/// Single-goal quote prompt: exactly one 3-8 word quote, plain text reply.
pub fn build_goal_quote_prompt(goal: &Goal, vision_type: &str, user_vision: &str) -> String {
    let description = goal.description.as_deref().unwrap_or(&goal.title);
    let vision_line = if user_vision.trim().is_empty() {
        String::new()
    } else {
        format!("User's Vision: {}\n", user_vision)
    };

    format!(
        r#"Generate ONE short, powerful, inspirational quote specifically for this goal on a vision board.

Vision Type: {vision_type}
Goal: {title}
Description: {description}
{vision_line}
Requirements:
- Generate EXACTLY ONE quote (3-8 words maximum)
- Make it specific and relevant to this exact goal: "{title}"
- Use motivational, empowering language
- Make it personal and actionable
- Return ONLY the quote text, nothing else
- No quotation marks, no numbering, no extra text

Examples of good short quotes:
- Dream it. Believe it. Achieve it.
- Your journey starts today.
- Make it happen.
- Success is your destiny."#,
        title = goal.title,
    )
}

/// Lenient fallback quote prompt used by the secondary resolution tier:
/// plain lines, universal wording, no language constraints.
pub fn build_fallback_quotes_prompt(count: usize, context: &str) -> String {
    format!(
        r#"Generate exactly {count} short, powerful, universal inspirational quotes about {context}.

Requirements:
- Each quote should be 3-8 words maximum
- Make them motivational and positive
- Universal and timeless
- Return ONLY the quotes, one per line
- No numbering, no bullet points, no quotation marks
- No author names

Examples:
Dream it. Believe it. Achieve it.
Your journey starts today.
Make it happen."#
    )
}
