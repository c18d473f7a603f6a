//! Vision-board image prompt construction.
//!
//! Two builders: the collage prompt for the single composite board image,
//! and the per-goal prompt set used when every goal gets its own image.
//! Image prompts collapse whitespace runs to single spaces so multi-line
//! templates arrive at the model as one clean instruction string.

use std::collections::HashMap;

use super::tables::{goal_phrase, size_guidance, theme_phrase, timeline_phrase};
use super::types::{Goal, GoalId, GoalPrompt};

/// Photography style shared by all board image prompts.
const BASE_STYLE: &str = "High-end editorial photography, 8k resolution, photorealistic, cinematic lighting, vibrant and uplifting colors, sharp focus, highly detailed, professional composition";

/// Negative constraints shared by all board image prompts.
const NEGATIVE_CONSTRAINTS: &str = "Avoid: cartoon, illustration, 3d render, drawing, painting, watermark, text overlay, blurry, distorted, dark, gloomy";

/// Default display quotes cycled by index when the per-goal quote map has
/// no entry for a goal.
pub static DEFAULT_GOAL_QUOTES: &[&str] = &[
    "Dream it. Believe it. Achieve it.",
    "Your only limit is your imagination.",
    "Make it happen.",
    "The future belongs to those who believe.",
    "Success starts with a vision.",
    "Believe in yourself.",
    "You are capable of amazing things.",
    "Every day is a new opportunity.",
];

/// Collapse whitespace runs (including newlines) to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Build the collage prompt for a single composite board image.
///
/// Combines the mapped theme, one imagery segment per goal (first-word
/// phrase table, else the goal's own description or title), the timeline
/// phrase, orientation guidance, and the one permitted text panel listing
/// the supplied quotes. Pure string construction; never fails.
pub fn build_board_prompt(
    vision_type: &str,
    goals: &[Goal],
    user_vision: &str,
    timeline: &str,
    board_size: &str,
    quotes: &[String],
) -> String {
    let goal_segments = goals
        .iter()
        .map(|goal| {
            let imagery = goal_phrase(&goal.title)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    goal.description
                        .clone()
                        .unwrap_or_else(|| goal.title.clone())
                });
            format!("a panel for \"{}\" showing {}", goal.title, imagery)
        })
        .collect::<Vec<_>>()
        .join("; ");

    let vision_block = if user_vision.trim().is_empty() {
        String::new()
    } else {
        format!(
            "PRIMARY VISION (MUST FOLLOW CLOSELY): {}.",
            user_vision.trim()
        )
    };

    let quote_panel = if quotes.is_empty() {
        "Do NOT render any text, letters or words anywhere in the image.".to_string()
    } else {
        format!(
            "Include exactly ONE dedicated quote panel rendering these quotes as elegant typography: {}. No other text anywhere in the image.",
            quotes.join(" | ")
        )
    };

    let prompt = format!(
        r#"Create a stunning vision board collage as a single image.

        Theme: {theme}.
        {vision_block}
        Goal panels: {goal_segments}.
        Timeline feeling: {timeline}.

        Style: {style}.

        Requirements:
        - Arrange the goals as distinct panels in one cohesive collage
        - Every panel must look like a real, high-quality photograph
        - Emotional tone: uplifting, inspiring, and positive
        - Show the end result as already achieved
        - {quote_panel}
        - {negative}

        {size}"#,
        theme = theme_phrase(vision_type),
        timeline = timeline_phrase(timeline),
        style = BASE_STYLE,
        negative = NEGATIVE_CONSTRAINTS,
        size = size_guidance(board_size),
    );

    collapse_whitespace(&prompt)
}

/// Build one image prompt per goal, order-preserving.
///
/// Each record carries the goal's id, the prompt string and a display
/// quote taken from `quotes` or cycled from [`DEFAULT_GOAL_QUOTES`]. No
/// validation happens here; quality control is the text side's concern.
pub fn build_goal_prompts(
    goals: &[Goal],
    vision_type: &str,
    user_vision: &str,
    quotes: &HashMap<GoalId, String>,
) -> Vec<GoalPrompt> {
    goals
        .iter()
        .enumerate()
        .map(|(index, goal)| {
            let quote = quotes
                .get(&goal.id)
                .cloned()
                .unwrap_or_else(|| {
                    DEFAULT_GOAL_QUOTES[index % DEFAULT_GOAL_QUOTES.len()].to_string()
                });

            let description = goal.description.as_deref().unwrap_or(&goal.title);
            let prompt = if user_vision.trim().is_empty() {
                format!(
                    r#"Create a stunning, photorealistic image representing: {title}.

                    Scene Details: {description}
                    Context: {context}

                    Style: {style}

                    Requirements:
                    - The image must look like a real, high-quality photograph WITHOUT any text
                    - Emotional tone: Uplifting, inspiring, and positive
                    - DO NOT include any text or quotes in the image
                    - {negative}"#,
                    title = goal.title,
                    context = theme_phrase(vision_type),
                    style = BASE_STYLE,
                    negative = NEGATIVE_CONSTRAINTS,
                )
            } else {
                format!(
                    r#"Create a stunning, photorealistic image for a vision board.

                    PRIMARY VISION (MUST FOLLOW CLOSELY):
                    {user_vision}

                    Specific Goal: {title}
                    Additional Details: {description}
                    Theme: {context}

                    Style: {style}

                    CRITICAL INSTRUCTIONS:
                    - The image MUST incorporate specific elements mentioned in the user's vision above
                    - If specific objects, activities, or scenes are mentioned (like bikes, cars, beaches, etc.), they MUST be included
                    - Make the image reflect the exact scenario and details described by the user
                    - DO NOT include any text or quotes in the image

                    Requirements:
                    - The image must look like a real, high-quality photograph WITHOUT any text
                    - Emotional tone: Uplifting, inspiring, and positive
                    - MUST reflect the user's specific vision and mentioned details
                    - {negative}"#,
                    title = goal.title,
                    context = theme_phrase(vision_type),
                    style = BASE_STYLE,
                    negative = NEGATIVE_CONSTRAINTS,
                )
            };

            GoalPrompt {
                goal_id: goal.id.clone(),
                prompt: collapse_whitespace(&prompt),
                quote,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_goals() -> Vec<Goal> {
        vec![
            Goal::new("g1", "Peak Fitness"),
            Goal::new("g2", "Dream Home"),
            Goal::new("g3", "Zanzibar Trip"),
        ]
    }

    #[test]
    fn test_goal_prompts_preserve_order_length_and_ids() {
        let goals = sample_goals();
        let prompts = build_goal_prompts(&goals, "health", "", &HashMap::new());
        assert_eq!(prompts.len(), goals.len());
        for (record, goal) in prompts.iter().zip(&goals) {
            assert_eq!(record.goal_id, goal.id);
        }
    }

    #[test]
    fn test_goal_prompts_use_supplied_quotes_and_cycle_defaults() {
        let goals = sample_goals();
        let mut quotes = HashMap::new();
        quotes.insert(GoalId::new("g2"), "Home is where it starts.".to_string());

        let prompts = build_goal_prompts(&goals, "money", "", &quotes);
        assert_eq!(prompts[0].quote, DEFAULT_GOAL_QUOTES[0]);
        assert_eq!(prompts[1].quote, "Home is where it starts.");
        assert_eq!(prompts[2].quote, DEFAULT_GOAL_QUOTES[2]);
    }

    #[test]
    fn test_goal_prompt_without_vision_uses_scene_template() {
        let goals = vec![Goal::new("1", "Savings")];
        let prompts = build_goal_prompts(&goals, "money", "", &HashMap::new());
        assert!(prompts[0].prompt.contains("representing: Savings"));
        assert!(prompts[0].prompt.contains("WITHOUT any text"));
        assert!(!prompts[0].prompt.contains("PRIMARY VISION"));
    }

    #[test]
    fn test_goal_prompt_with_vision_makes_it_primary() {
        let goals = vec![Goal::new("1", "Travel the World")];
        let prompts = build_goal_prompts(
            &goals,
            "money",
            "riding my red motorbike along the coast",
            &HashMap::new(),
        );
        assert!(prompts[0].prompt.contains("PRIMARY VISION (MUST FOLLOW CLOSELY)"));
        assert!(prompts[0]
            .prompt
            .contains("riding my red motorbike along the coast"));
    }

    #[test]
    fn test_goal_prompts_collapse_whitespace() {
        let goals = vec![Goal::new("1", "Savings")];
        let prompts = build_goal_prompts(&goals, "money", "", &HashMap::new());
        assert!(!prompts[0].prompt.contains('\n'));
        assert!(!prompts[0].prompt.contains("  "));
    }

    #[test]
    fn test_board_prompt_maps_known_goals_and_passes_unknown_through() {
        let goals = sample_goals();
        let prompt = build_board_prompt("health", &goals, "", "6months", "desktop", &[]);
        // "Peak" matches the goal table; "Zanzibar" falls back to the title.
        assert!(prompt.contains("peak physical fitness"));
        assert!(prompt.contains("\"Zanzibar Trip\" showing Zanzibar Trip"));
        assert!(prompt.contains("wellness, vitality, fitness"));
        assert!(prompt.contains("substantial progress, half-year achievements"));
        assert!(prompt.contains("horizontal/landscape"));
    }

    #[test]
    fn test_board_prompt_quote_panel_rules() {
        let quotes = vec!["Dream Big.".to_string(), "Keep Going.".to_string()];
        let with_quotes =
            build_board_prompt("money", &sample_goals(), "", "1year", "mobile", &quotes);
        assert!(with_quotes.contains("exactly ONE dedicated quote panel"));
        assert!(with_quotes.contains("Dream Big. | Keep Going."));

        let without_quotes =
            build_board_prompt("money", &sample_goals(), "", "1year", "mobile", &[]);
        assert!(without_quotes.contains("Do NOT render any text"));
    }

    #[test]
    fn test_board_prompt_unknown_keys_pass_verbatim() {
        let prompt = build_board_prompt("gardening", &[], "", "2years", "tablet", &[]);
        assert!(prompt.contains("Theme: gardening."));
        assert!(prompt.contains("Timeline feeling: 2years."));
        assert!(prompt.ends_with("tablet"));
    }

    #[test]
    fn test_board_prompt_is_deterministic() {
        let goals = sample_goals();
        let a = build_board_prompt("health", &goals, "v", "1month", "desktop", &[]);
        let b = build_board_prompt("health", &goals, "v", "1month", "desktop", &[]);
        assert_eq!(a, b);
    }
}
