//! Fixed lookup tables used by prompt construction.
//!
//! Three small vocabularies map enum-like request strings to descriptive
//! phrases: vision themes, goal first-words, and timelines, plus the image
//! orientation guidance. All tables are immutable statics; unknown keys
//! pass through verbatim so a novel value degrades the prompt instead of
//! failing the request.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Theme phrase for a vision type.
#[derive(Debug, Clone)]
pub struct ThemePhrase {
    /// The vision type identifier (e.g. "money").
    pub vision_type: &'static str,
    /// Descriptive imagery phrase woven into prompts.
    pub phrase: &'static str,
}

/// Static array of theme phrases, one per supported vision type.
pub static THEME_PHRASES: &[ThemePhrase] = &[
    ThemePhrase {
        vision_type: "money",
        phrase: "luxury lifestyle, wealth, abundance, financial success, prosperity",
    },
    ThemePhrase {
        vision_type: "career",
        phrase: "professional success, achievement, leadership, growth, recognition",
    },
    ThemePhrase {
        vision_type: "health",
        phrase: "wellness, vitality, fitness, balance, healthy lifestyle",
    },
    ThemePhrase {
        vision_type: "relationships",
        phrase: "love, connection, family, friendship, harmony",
    },
    ThemePhrase {
        vision_type: "custom",
        phrase: "success, happiness, achievement, dream life",
    },
    ThemePhrase {
        vision_type: "typevision",
        phrase: "personal dreams, custom vision, unique goals, aspirations",
    },
];

/// Goal phrase keyed by the first word of a lower-cased goal title.
#[derive(Debug, Clone)]
pub struct GoalPhrase {
    /// First word of the goal title, lower-cased.
    pub first_word: &'static str,
    /// Imagery phrase for that goal family.
    pub phrase: &'static str,
}

/// Static array of goal phrases covering the predefined wizard goals.
pub static GOAL_PHRASES: &[GoalPhrase] = &[
    // Money
    GoalPhrase {
        first_word: "financial",
        phrase: "complete financial independence, growing wealth, a secure prosperous future",
    },
    GoalPhrase {
        first_word: "dream",
        phrase: "a stunning dream home with beautiful architecture and warm golden light",
    },
    GoalPhrase {
        first_word: "luxury",
        phrase: "premium luxury living, elegant interiors, refined abundant taste",
    },
    GoalPhrase {
        first_word: "travel",
        phrase: "first-class travel, iconic world destinations, tropical beaches at sunset",
    },
    GoalPhrase {
        first_word: "investments",
        phrase: "a thriving investment portfolio, upward market momentum",
    },
    GoalPhrase {
        first_word: "passive",
        phrase: "income flowing effortlessly, freedom from the desk",
    },
    GoalPhrase {
        first_word: "savings",
        phrase: "substantial savings, a growing safety net, financial calm",
    },
    // Career
    GoalPhrase {
        first_word: "leadership",
        phrase: "executive presence, leading a team with confidence",
    },
    GoalPhrase {
        first_word: "recognition",
        phrase: "industry awards, applause, a moment of public recognition",
    },
    GoalPhrase {
        first_word: "business",
        phrase: "a flourishing business, growth milestones, success in motion",
    },
    GoalPhrase {
        first_word: "expertise",
        phrase: "deep mastery of a craft, respected professional authority",
    },
    GoalPhrase {
        first_word: "startup",
        phrase: "a successful startup launch, an energized founding team",
    },
    GoalPhrase {
        first_word: "networking",
        phrase: "powerful professional connections, meaningful collaboration",
    },
    GoalPhrase {
        first_word: "innovation",
        phrase: "revolutionary ideas taking shape, creative breakthroughs",
    },
    // Health
    GoalPhrase {
        first_word: "peak",
        phrase: "peak physical fitness, strength and energy, an ideal body",
    },
    GoalPhrase {
        first_word: "inner",
        phrase: "inner peace, calm meditation, a quiet centered mind",
    },
    GoalPhrase {
        first_word: "healthy",
        phrase: "clean vibrant meals, nourishing food, wholesome daily habits",
    },
    GoalPhrase {
        first_word: "active",
        phrase: "an active life outdoors, running at sunrise, sports in motion",
    },
    GoalPhrase {
        first_word: "quality",
        phrase: "deep restful sleep, a serene bedroom at dusk",
    },
    GoalPhrase {
        first_word: "mental",
        phrase: "sharp mental clarity, a focused and bright mind",
    },
    GoalPhrase {
        first_word: "wellness",
        phrase: "complete mind and body wellness, balance and harmony",
    },
    // Relationships
    GoalPhrase {
        first_word: "true",
        phrase: "deep genuine bonds, love and loyal friendship",
    },
    GoalPhrase {
        first_word: "happy",
        phrase: "a happy family together, warmth and belonging",
    },
    GoalPhrase {
        first_word: "social",
        phrase: "helping and inspiring others, positive social impact",
    },
    GoalPhrase {
        first_word: "perfect",
        phrase: "an ideal loving partnership, shared everyday joy",
    },
    GoalPhrase {
        first_word: "parenthood",
        phrase: "growing a family, tender new beginnings",
    },
    GoalPhrase {
        first_word: "home",
        phrase: "a harmonious home life, comfort and peace",
    },
    GoalPhrase {
        first_word: "self",
        phrase: "deep self-acceptance, quiet confidence",
    },
    // Custom
    GoalPhrase {
        first_word: "personal",
        phrase: "a unique personal dream fully realized",
    },
    GoalPhrase {
        first_word: "achievement",
        phrase: "a defining achievement unlocked",
    },
    GoalPhrase {
        first_word: "learning",
        phrase: "mastering new skills, books and discovery",
    },
    GoalPhrase {
        first_word: "adventure",
        phrase: "bold exploration, wide horizons, new experiences",
    },
    GoalPhrase {
        first_word: "success",
        phrase: "success on your own terms, goals accomplished",
    },
    GoalPhrase {
        first_word: "creative",
        phrase: "creative expression in full color",
    },
];

/// Timeline phrase for a timeline identifier.
#[derive(Debug, Clone)]
pub struct TimelinePhrase {
    /// Timeline identifier (e.g. "6months").
    pub timeline: &'static str,
    /// Imagery phrase evoking that horizon.
    pub phrase: &'static str,
}

/// Static array of timeline phrases.
pub static TIMELINE_PHRASES: &[TimelinePhrase] = &[
    TimelinePhrase {
        timeline: "1month",
        phrase: "immediate fresh start, new beginnings, quick wins, early morning light",
    },
    TimelinePhrase {
        timeline: "3months",
        phrase: "building momentum, growth in progress, spring energy, blossoming success",
    },
    TimelinePhrase {
        timeline: "6months",
        phrase: "substantial progress, half-year achievements, summer abundance",
    },
    TimelinePhrase {
        timeline: "1year",
        phrase: "major milestone achieved, annual success, full cycle completion, celebration",
    },
    TimelinePhrase {
        timeline: "5years",
        phrase: "long-term success, established wealth, lasting achievement, legacy building",
    },
    TimelinePhrase {
        timeline: "lifetime",
        phrase: "ultimate life achievement, generational success, timeless prosperity, lifetime fulfillment",
    },
];

/// Orientation guidance appended to image prompts, keyed by board size.
#[derive(Debug, Clone)]
pub struct SizeGuidance {
    /// Board size identifier ("desktop" or "mobile").
    pub size: &'static str,
    /// Full guidance sentence.
    pub guidance: &'static str,
}

/// Static array of orientation guidance phrases.
pub static SIZE_GUIDANCE: &[SizeGuidance] = &[
    SizeGuidance {
        size: "desktop",
        guidance: "Create a horizontal/landscape oriented image suitable for a desktop wallpaper.",
    },
    SizeGuidance {
        size: "mobile",
        guidance: "Create a vertical/portrait oriented image suitable for a phone wallpaper.",
    },
];

/// Lookup map for theme phrases by vision type.
static THEME_LOOKUP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    THEME_PHRASES
        .iter()
        .map(|t| (t.vision_type, t.phrase))
        .collect()
});

/// Lookup map for goal phrases by first word.
static GOAL_LOOKUP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    GOAL_PHRASES
        .iter()
        .map(|g| (g.first_word, g.phrase))
        .collect()
});

/// Lookup map for timeline phrases by identifier.
static TIMELINE_LOOKUP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    TIMELINE_PHRASES
        .iter()
        .map(|t| (t.timeline, t.phrase))
        .collect()
});

/// Lookup map for size guidance by identifier.
static SIZE_LOOKUP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    SIZE_GUIDANCE.iter().map(|s| (s.size, s.guidance)).collect()
});

/// Phrase for a vision type; unknown types pass through verbatim.
pub fn theme_phrase(vision_type: &str) -> &str {
    THEME_LOOKUP.get(vision_type).copied().unwrap_or(vision_type)
}

/// Phrase for a goal title, matched on the lower-cased first word.
///
/// Returns `None` when no table entry matches; callers fall back to the
/// goal's own description or title.
pub fn goal_phrase(title: &str) -> Option<&'static str> {
    let first_word = title.split_whitespace().next()?.to_lowercase();
    GOAL_LOOKUP.get(first_word.as_str()).copied()
}

/// Phrase for a timeline identifier; unknown values pass through verbatim.
pub fn timeline_phrase(timeline: &str) -> &str {
    TIMELINE_LOOKUP.get(timeline).copied().unwrap_or(timeline)
}

/// Orientation guidance for a board size; unknown values pass through
/// verbatim.
pub fn size_guidance(size: &str) -> &str {
    SIZE_LOOKUP.get(size).copied().unwrap_or(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_phrase_known_types() {
        assert_eq!(
            theme_phrase("money"),
            "luxury lifestyle, wealth, abundance, financial success, prosperity"
        );
        assert_eq!(
            theme_phrase("health"),
            "wellness, vitality, fitness, balance, healthy lifestyle"
        );
    }

    #[test]
    fn test_theme_phrase_unknown_passes_through() {
        assert_eq!(theme_phrase("gardening"), "gardening");
        assert_eq!(theme_phrase(""), "");
    }

    #[test]
    fn test_goal_phrase_first_word_match() {
        let phrase = goal_phrase("Peak Fitness").expect("peak should match");
        assert!(phrase.contains("peak physical fitness"));

        // Match is on the first word only; the rest of the title is ignored.
        assert_eq!(
            goal_phrase("Dream Home"),
            goal_phrase("Dream Job Somewhere")
        );
    }

    #[test]
    fn test_goal_phrase_is_case_insensitive() {
        assert_eq!(goal_phrase("PEAK fitness"), goal_phrase("peak fitness"));
    }

    #[test]
    fn test_goal_phrase_unmatched_returns_none() {
        assert!(goal_phrase("Zanzibar Trip").is_none());
        assert!(goal_phrase("").is_none());
        assert!(goal_phrase("   ").is_none());
    }

    #[test]
    fn test_timeline_phrase_known_and_unknown() {
        assert_eq!(
            timeline_phrase("1year"),
            "major milestone achieved, annual success, full cycle completion, celebration"
        );
        assert_eq!(timeline_phrase("2years"), "2years");
    }

    #[test]
    fn test_size_guidance() {
        assert!(size_guidance("mobile").contains("vertical/portrait"));
        assert!(size_guidance("desktop").contains("horizontal/landscape"));
        assert_eq!(size_guidance("tablet"), "tablet");
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        assert_eq!(THEME_LOOKUP.len(), THEME_PHRASES.len());
        assert_eq!(GOAL_LOOKUP.len(), GOAL_PHRASES.len());
        assert_eq!(TIMELINE_LOOKUP.len(), TIMELINE_PHRASES.len());
    }
}
