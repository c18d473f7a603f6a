//! Language and script validation for generated quote batches.
//!
//! The model is instructed to answer in the selected languages, but the
//! instructions are advisory; this module is the enforcement side. Each
//! item is checked against the writing system its language is expected to
//! use, and a batch survives only when at least half the requested count
//! passes. A rejected batch is not an error: resolution substitutes
//! fallback content instead.

use std::sync::LazyLock;

use regex::Regex;

use crate::prompts::language::{expected_script, Script};

/// Latin allow-list: letters plus basic punctuation, nothing else.
static LATIN_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s.,!?'-]+$").expect("valid latin regex"));

/// Any character in the Devanagari block (U+0900..U+097F).
static HAS_DEVANAGARI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ऀ-ॿ]").expect("valid devanagari regex"));

/// Any ASCII Latin letter.
static HAS_LATIN_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]").expect("valid latin letter regex"));

/// Why a batch was rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRejection {
    /// Fewer than half the requested items survived per-item validation.
    TooFewValid { surviving: usize, requested: usize },
}

impl std::fmt::Display for BatchRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchRejection::TooFewValid {
                surviving,
                requested,
            } => write!(
                f,
                "only {} of {} requested quotes passed language validation",
                surviving, requested
            ),
        }
    }
}

/// Check a single item against the script its language is expected to use.
///
/// Latin languages accept only the Latin allow-list with no Devanagari
/// character anywhere; Devanagari languages require at least one
/// Devanagari character and no Latin letter. Unknown languages accept
/// everything, matching the pass-through policy of the lookup tables.
pub fn item_matches_language(item: &str, language: &str) -> bool {
    match expected_script(language) {
        Some(Script::Latin) => LATIN_ONLY.is_match(item) && !HAS_DEVANAGARI.is_match(item),
        Some(Script::Devanagari) => {
            HAS_DEVANAGARI.is_match(item) && !HAS_LATIN_LETTER.is_match(item)
        }
        None => true,
    }
}

/// Check an item against a multi-language selection: it must match the
/// expected script of at least one selected language.
pub fn item_matches_any_language(item: &str, languages: &[String]) -> bool {
    languages.iter().any(|lang| item_matches_language(item, lang))
}

/// Validate a parsed batch against the selected languages.
///
/// Empty items are always dropped. With exactly one language the per-item
/// rule applies as-is; with several, an item passes if it matches any
/// selected language's script. The surviving set is accepted only when it
/// reaches `ceil(requested/2)`, and is truncated to `requested`.
pub fn validate_batch(
    items: Vec<String>,
    languages: &[String],
    requested: usize,
) -> Result<Vec<String>, BatchRejection> {
    let surviving: Vec<String> = items
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .filter(|item| match languages {
            [] => true,
            [only] => item_matches_language(item, only),
            many => item_matches_any_language(item, many),
        })
        .collect();

    if surviving.len() < requested.div_ceil(2) {
        return Err(BatchRejection::TooFewValid {
            surviving: surviving.len(),
            requested,
        });
    }

    Ok(surviving.into_iter().take(requested).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_english_accepts_latin_only() {
        assert!(item_matches_language("Dream Big.", "English"));
        assert!(item_matches_language("Don't stop now!", "English"));
        // Devanagari anywhere disqualifies an English item.
        assert!(!item_matches_language("Dream बड़े", "English"));
        // Digits and emoji fall outside the allow-list.
        assert!(!item_matches_language("Top 10 wins", "English"));
        assert!(!item_matches_language("Dream 💫", "English"));
    }

    #[test]
    fn test_devanagari_languages_reject_latin_letters() {
        assert!(item_matches_language("बड़े सपने देखो।", "Hindi"));
        assert!(item_matches_language("मोठी स्वप्ने पहा.", "Marathi"));
        assert!(!item_matches_language("Dream Big.", "Marathi"));
        // Mixed-script items fail both directions.
        assert!(!item_matches_language("सपने Dream", "Hindi"));
        assert!(!item_matches_language("सपने Dream", "English"));
    }

    #[test]
    fn test_unknown_language_accepts_everything() {
        assert!(item_matches_language("¡Sueña en grande!", "Spanish"));
    }

    #[test]
    fn test_set_check_accepts_any_selected_script() {
        let selection = langs(&["English", "Marathi"]);
        assert!(item_matches_any_language("Dream Big.", &selection));
        assert!(item_matches_any_language("मोठी स्वप्ने पहा.", &selection));
        assert!(!item_matches_any_language("夢を見る", &selection));
    }

    #[test]
    fn test_validate_batch_single_language_filters_and_truncates() {
        let items = strings(&[
            "Dream Big.",
            "बड़े सपने देखो।",
            "Stay Focused.",
            "Keep Going.",
            "Make It Happen.",
        ]);
        let accepted = validate_batch(items, &langs(&["English"]), 4).unwrap();
        assert_eq!(
            accepted,
            vec!["Dream Big.", "Stay Focused.", "Keep Going.", "Make It Happen."]
        );
    }

    #[test]
    fn test_validate_batch_rejects_below_half() {
        // 4 requested, ceil(4/2) = 2 needed; only one survives.
        let items = strings(&["Dream Big.", "बड़े सपने", "खुद पर विश्वास", "सफलता"]);
        let result = validate_batch(items, &langs(&["English"]), 4);
        assert_eq!(
            result,
            Err(BatchRejection::TooFewValid {
                surviving: 1,
                requested: 4
            })
        );
    }

    #[test]
    fn test_validate_batch_boundary_exactly_half() {
        // 5 requested, ceil(5/2) = 3: three survivors pass, two do not.
        let three = strings(&["One fine day.", "Keep going.", "Dream on.", "सपने"]);
        assert!(validate_batch(three, &langs(&["English"]), 5).is_ok());

        let two = strings(&["One fine day.", "Keep going.", "सपने", "सफलता"]);
        assert!(validate_batch(two, &langs(&["English"]), 5).is_err());
    }

    #[test]
    fn test_validate_batch_multi_language_set_rule() {
        // Chinese line matches neither selected script and is dropped.
        let items = strings(&["Dream Big.", "मोठी स्वप्ने पहा.", "夢を見る", "Keep Going."]);
        let accepted =
            validate_batch(items, &langs(&["English", "Marathi"]), 4).unwrap();
        assert_eq!(
            accepted,
            vec!["Dream Big.", "मोठी स्वप्ने पहा.", "Keep Going."]
        );
    }

    #[test]
    fn test_validate_batch_drops_empty_items() {
        let items = strings(&["", "  ", "Dream Big.", "Stay Focused."]);
        let accepted = validate_batch(items, &langs(&["English"]), 2).unwrap();
        assert_eq!(accepted, vec!["Dream Big.", "Stay Focused."]);
    }

    #[test]
    fn test_validate_batch_empty_selection_skips_script_filter() {
        let items = strings(&["Dream Big.", "मोठी स्वप्ने पहा."]);
        let accepted = validate_batch(items, &[], 2).unwrap();
        assert_eq!(accepted.len(), 2);
    }
}
