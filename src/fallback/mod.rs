//! Static fallback content and selection rules.
//!
//! The last line of defense: pre-written quotes per language, a minimal
//! default list, and the reflective-question literals. Selection never
//! fails and never returns an empty collection; a language without a table
//! entry resolves to the English list.

/// Fallback quote list for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageQuotes {
    /// Request-facing language name.
    pub language: &'static str,
    /// Pre-written quotes in that language.
    pub quotes: &'static [&'static str],
}

/// Static per-language fallback quote table. English is the guaranteed
/// default entry.
pub static QUOTES_BY_LANGUAGE: &[LanguageQuotes] = &[
    LanguageQuotes {
        language: "English",
        quotes: &[
            "Dream Big.",
            "Stay Focused.",
            "Make It Happen.",
            "Believe In Yourself.",
            "Success Awaits.",
            "Keep Moving Forward.",
        ],
    },
    LanguageQuotes {
        language: "Hindi",
        quotes: &[
            "बड़े सपने देखो।",
            "केंद्रित रहो।",
            "इसे साकार करो।",
            "खुद पर विश्वास करो।",
            "सफलता आपकी है।",
            "आगे बढ़ते रहो।",
        ],
    },
    LanguageQuotes {
        language: "Marathi",
        quotes: &[
            "मोठी स्वप्ने पहा.",
            "लक्ष केंद्रित करा.",
            "ते साकार करा.",
            "स्वतःवर विश्वास ठेवा.",
            "यश तुमचे आहे.",
            "पुढे जात रहा.",
        ],
    },
];

/// Minimal English defaults used when even lenient generation fails.
pub static MINIMAL_DEFAULTS: &[&str] = &[
    "Believe in yourself.",
    "Make it happen.",
    "Dream big.",
    "You are capable.",
    "Success awaits.",
    "Keep going.",
    "Stay focused.",
    "You've got this.",
];

/// Static reflective questions used when question generation fails twice.
pub static FALLBACK_QUESTIONS: &[&str] = &[
    "What does success look like for you in this area?",
    "How will achieving this goal change your life?",
    "What steps are you most excited to take?",
];

/// Per-goal literal when quote generation fails for a single goal.
pub const GOAL_QUOTE_LITERAL: &str = "Believe in your dreams.";

/// Substitute when a generated quote cleans down to nothing.
pub const EMPTY_QUOTE_LITERAL: &str = "Make your dreams reality.";

/// Fallback quotes for a language; absent languages resolve to English.
pub fn quotes_for_language(language: &str) -> &'static [&'static str] {
    QUOTES_BY_LANGUAGE
        .iter()
        .find(|entry| entry.language == language)
        .or_else(|| {
            QUOTES_BY_LANGUAGE
                .iter()
                .find(|entry| entry.language == "English")
        })
        .map(|entry| entry.quotes)
        .unwrap_or(MINIMAL_DEFAULTS)
}

/// Select `count` static fallback quotes for a language selection.
///
/// A single language takes the head of its table. Several languages each
/// contribute `ceil(count/languages)` quotes in selection order, truncated
/// to `count`. An empty selection behaves as English. The result is never
/// empty for `count >= 1`.
pub fn static_quotes(languages: &[String], count: usize) -> Vec<String> {
    let count = count.max(1);
    match languages {
        [] => quotes_for_language("English")
            .iter()
            .take(count)
            .map(|q| q.to_string())
            .collect(),
        [only] => quotes_for_language(only)
            .iter()
            .take(count)
            .map(|q| q.to_string())
            .collect(),
        many => {
            let per_language = count.div_ceil(many.len());
            many.iter()
                .flat_map(|lang| quotes_for_language(lang).iter().take(per_language))
                .take(count)
                .map(|q| q.to_string())
                .collect()
        }
    }
}

/// The static question literals as owned strings, truncated to `count`.
pub fn static_questions(count: usize) -> Vec<String> {
    FALLBACK_QUESTIONS
        .iter()
        .take(count.max(1))
        .map(|q| q.to_string())
        .collect()
}

/// The minimal default quotes as owned strings, truncated to `count`.
pub fn minimal_quotes(count: usize) -> Vec<String> {
    MINIMAL_DEFAULTS
        .iter()
        .take(count.max(1))
        .map(|q| q.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_table_has_english_entry() {
        assert_eq!(quotes_for_language("English")[0], "Dream Big.");
    }

    #[test]
    fn test_absent_language_resolves_to_english() {
        assert_eq!(quotes_for_language("Klingon"), quotes_for_language("English"));
    }

    #[test]
    fn test_single_language_takes_table_head() {
        let quotes = static_quotes(&langs(&["Marathi"]), 3);
        assert_eq!(
            quotes,
            vec!["मोठी स्वप्ने पहा.", "लक्ष केंद्रित करा.", "ते साकार करा."]
        );
    }

    #[test]
    fn test_multi_language_distribution() {
        // ceil(4/2) = 2 per language, truncated to 4.
        let quotes = static_quotes(&langs(&["English", "Hindi"]), 4);
        assert_eq!(
            quotes,
            vec![
                "Dream Big.",
                "Stay Focused.",
                "बड़े सपने देखो।",
                "केंद्रित रहो।"
            ]
        );
    }

    #[test]
    fn test_multi_language_truncates_to_count() {
        // ceil(3/2) = 2 per language, 4 collected, truncated to 3.
        let quotes = static_quotes(&langs(&["English", "Marathi"]), 3);
        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[2], "मोठी स्वप्ने पहा.");
    }

    #[test]
    fn test_fallback_is_never_empty() {
        assert!(!static_quotes(&[], 0).is_empty());
        assert!(!static_quotes(&langs(&["Klingon"]), 1).is_empty());
        assert!(!static_questions(0).is_empty());
        assert!(!minimal_quotes(0).is_empty());
    }

    #[test]
    fn test_static_questions_all_end_in_question_mark() {
        for question in static_questions(3) {
            assert!(question.ends_with('?'));
        }
    }
}
