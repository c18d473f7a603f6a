//! Parsing of model free-text responses.
//!
//! The remote model is asked for structured output but does not reliably
//! produce it, so parsing is a strategy chain: strip markdown code fences,
//! attempt the keyed-JSON shape, and fall back to line splitting with
//! per-endpoint acceptance policies. Nothing here errors out to callers;
//! an unusable response simply yields an empty collection and the
//! resolution tiers above decide what to substitute.
//!
//! # Line policies
//!
//! - quote lists: non-empty lines under 100 characters
//! - loose lines (the lenient re-parse of a rejected structured reply):
//!   anything longer than 5 characters
//! - question lists: lines containing a question mark
//! - single items: surrounding quote marks, leading numbering and bullet
//!   dashes stripped

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Upper length bound for an accepted quote line.
const MAX_QUOTE_LEN: usize = 100;

/// Minimum length for the lenient line policy.
const MIN_LOOSE_LEN: usize = 5;

static LEADING_NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid numbering regex"));

static LEADING_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\s*").expect("valid bullet regex"));

/// Remove markdown code-fence markers (```json and bare ```), keeping the
/// fenced content.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a keyed-JSON quote response (`{"quote1": ..., "quote2": ...}`)
/// into an ordered list.
///
/// Values are ordered by the numeric suffix of their keys, so a model that
/// reorders keys still yields `quote1..quoteN` order; keys without a
/// numeric suffix sort after the numbered ones in key order. Returns
/// `None` when the cleaned text is not a JSON object of strings.
pub fn parse_keyed_quotes(text: &str, limit: usize) -> Option<Vec<String>> {
    let clean = strip_code_fences(text);
    let value: Value = serde_json::from_str(&clean).ok()?;
    let object = value.as_object()?;

    let mut entries: Vec<(u64, &str, &str)> = Vec::new();
    for (key, value) in object {
        let text = value.as_str()?;
        let suffix = key
            .trim_start_matches(|c: char| !c.is_ascii_digit())
            .parse::<u64>()
            .unwrap_or(u64::MAX);
        entries.push((suffix, key.as_str(), text));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(b.1)));

    Some(
        entries
            .into_iter()
            .map(|(_, _, text)| text.to_string())
            .take(limit)
            .collect(),
    )
}

/// Split a plain-text quote reply into trimmed lines, dropping empties and
/// anything at or above 100 characters.
pub fn split_quote_lines(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.len() < MAX_QUOTE_LEN)
        .map(str::to_string)
        .take(limit)
        .collect()
}

/// Lenient line split used when a structured reply was rejected: any line
/// longer than 5 characters is kept.
pub fn split_loose_lines(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.len() > MIN_LOOSE_LEN)
        .map(str::to_string)
        .take(limit)
        .collect()
}

/// Split a question reply into lines that actually contain a question mark.
pub fn split_question_lines(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.contains('?'))
        .map(str::to_string)
        .take(limit)
        .collect()
}

/// Clean a single-quote reply: trim, strip surrounding quote marks, then
/// leading numbering and bullet dashes.
pub fn clean_single_quote(text: &str) -> String {
    let trimmed = text.trim();
    let unquoted = trimmed
        .trim_start_matches(['"', '\''])
        .trim_end_matches(['"', '\'']);
    let unnumbered = LEADING_NUMBERING.replace(unquoted, "");
    let unbulleted = LEADING_BULLET.replace(&unnumbered, "");
    unbulleted.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences() {
        let fenced = "```json\n{\"quote1\": \"Dream Big.\"}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"quote1\": \"Dream Big.\"}");
        assert_eq!(strip_code_fences("plain text"), "plain text");
    }

    #[test]
    fn test_parse_keyed_quotes_in_order() {
        let raw = r#"{"quote1": "One.", "quote2": "Two.", "quote3": "Three."}"#;
        let quotes = parse_keyed_quotes(raw, 3).unwrap();
        assert_eq!(quotes, vec!["One.", "Two.", "Three."]);
    }

    #[test]
    fn test_parse_keyed_quotes_orders_by_numeric_suffix() {
        // quote10 must sort after quote2, not between quote1 and quote2.
        let raw = r#"{"quote10": "Ten.", "quote2": "Two.", "quote1": "One."}"#;
        let quotes = parse_keyed_quotes(raw, 10).unwrap();
        assert_eq!(quotes, vec!["One.", "Two.", "Ten."]);
    }

    #[test]
    fn test_parse_keyed_quotes_strips_fences_and_limits() {
        let raw = "```json\n{\"quote1\": \"A.\", \"quote2\": \"B.\", \"quote3\": \"C.\"}\n```";
        let quotes = parse_keyed_quotes(raw, 2).unwrap();
        assert_eq!(quotes, vec!["A.", "B."]);
    }

    #[test]
    fn test_parse_keyed_quotes_rejects_non_objects() {
        assert!(parse_keyed_quotes("just some prose", 4).is_none());
        assert!(parse_keyed_quotes("[\"a\", \"b\"]", 4).is_none());
        assert!(parse_keyed_quotes("{\"quote1\": 42}", 4).is_none());
    }

    #[test]
    fn test_split_quote_lines_drops_empty_and_long() {
        let long = "x".repeat(120);
        let text = format!("Dream Big.\n\n  Stay Focused.  \n{}\nKeep Going.", long);
        let quotes = split_quote_lines(&text, 10);
        assert_eq!(quotes, vec!["Dream Big.", "Stay Focused.", "Keep Going."]);
    }

    #[test]
    fn test_split_quote_lines_respects_limit() {
        let text = "a1\na2\na3\na4";
        assert_eq!(split_quote_lines(text, 2).len(), 2);
    }

    #[test]
    fn test_split_loose_lines_keeps_longer_than_five() {
        let text = "tiny\nlong enough line\nok?\nanother good one";
        let lines = split_loose_lines(text, 10);
        assert_eq!(lines, vec!["long enough line", "another good one"]);
    }

    #[test]
    fn test_split_question_lines_requires_question_mark() {
        let text = "What does success look like?\nA statement.\nHow will you feel?";
        let questions = split_question_lines(text, 3);
        assert_eq!(
            questions,
            vec!["What does success look like?", "How will you feel?"]
        );
    }

    #[test]
    fn test_clean_single_quote() {
        assert_eq!(clean_single_quote("\"Make it happen.\""), "Make it happen.");
        assert_eq!(clean_single_quote("1. Make it happen."), "Make it happen.");
        assert_eq!(clean_single_quote("- Make it happen."), "Make it happen.");
        assert_eq!(
            clean_single_quote("  'Your journey starts today.'  "),
            "Your journey starts today."
        );
        assert_eq!(clean_single_quote(""), "");
    }
}
