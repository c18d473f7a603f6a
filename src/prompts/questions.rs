//! Reflective-question prompt construction.

use super::types::Goal;

/// Number of questions the proxy asks for and returns.
pub const QUESTION_COUNT: usize = 3;

/// Primary question prompt: three introspective questions tied to the
/// vision type and the selected goals, one per line so each parsed line
/// can be kept on the question-mark filter alone.
pub fn build_questions_prompt(vision_type: &str, goals: &[Goal]) -> String {
    let goal_titles: Vec<&str> = goals
        .iter()
        .map(|g| g.title.as_str())
        .filter(|t| !t.is_empty())
        .collect();
    let titles = if goal_titles.is_empty() {
        "personal growth".to_string()
    } else {
        goal_titles.join(", ")
    };

    let goal_details = goals
        .iter()
        .map(|g| {
            format!(
                "{} {}: {}",
                g.emoji.as_deref().unwrap_or(""),
                g.title,
                g.description.as_deref().unwrap_or("")
            )
            .trim()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are helping someone create a vision board for "{vision_type}".

Their specific goals are:
{goal_details}

Generate exactly {count} unique, deep, thought-provoking questions that will help them clarify their vision and dreams.

IMPORTANT REQUIREMENTS:
- Each question MUST be different and unique
- Questions should be SPECIFIC to their vision type "{vision_type}" and their individual goals
- Ask about their vision, feelings, ideal outcomes, and what success looks like
- Make questions personal and introspective
- Each question should be 12-25 words
- Focus on visualization and emotional connection
- Return ONLY the questions, one per line
- No numbering, no bullet points, no extra text

Examples of GOOD questions for different vision types:
- For Money/Wealth: "Describe your ideal lifestyle when you achieve financial freedom - where do you live and what does your day look like?"
- For Health: "How will your body feel and what activities will you enjoy when you reach your peak fitness?"
- For Career: "What recognition and achievements will make you feel most proud in your professional journey?"

Now generate {count} unique questions specifically for "{vision_type}" with goals: {titles}"#,
        count = QUESTION_COUNT,
    )
}

/// Lenient fallback question prompt used by the secondary resolution tier.
pub fn build_fallback_questions_prompt(count: usize, vision_type: &str) -> String {
    format!(
        r#"Generate {count} simple, thoughtful questions for someone creating a vision board about "{vision_type}".

Requirements:
- Each question should be 10-20 words
- Make them introspective and helpful
- Return ONLY the questions, one per line
- No numbering, no bullet points

Examples:
What does success look like for you?
How will achieving this goal change your life?
What steps are you most excited to take?"#
    )
}
