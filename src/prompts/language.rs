//! Language registry and language-instruction construction.
//!
//! The proxy supports a small set of languages, each bound to a writing
//! system. Quote prompts carry explicit language instructions whose shape
//! depends on how many languages were selected:
//!
//! - one language: exclusive use, with prohibitions of every other
//!   supported script
//! - two languages: an even-ish split (`ceil(n/2)` in the first, the
//!   remainder in the second)
//! - three or more: every selected language must appear at least once
//!
//! All builders are pure string construction and never fail; an empty
//! selection yields empty instructions.

/// Writing system a supported language uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Devanagari,
}

impl Script {
    /// Human-readable label used inside prompt text.
    pub fn label(&self) -> &'static str {
        match self {
            Script::Latin => "Latin alphabet",
            Script::Devanagari => "Devanagari script",
        }
    }
}

/// A supported language: its display name, script, and example quotes
/// cited inside prompts.
#[derive(Debug, Clone)]
pub struct LanguageSpec {
    /// Request-facing language name (e.g. "Marathi").
    pub name: &'static str,
    /// Writing system the language is expected to use.
    pub script: Script,
    /// Native-script label shown in prompt examples.
    pub native_label: &'static str,
    /// Example quotes in this language.
    pub examples: &'static [&'static str],
}

/// Static array of supported languages.
pub static LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        name: "English",
        script: Script::Latin,
        native_label: "A-Z, a-z",
        examples: &[
            "Dream big and achieve.",
            "Success is yours.",
            "Find happiness.",
        ],
    },
    LanguageSpec {
        name: "Hindi",
        script: Script::Devanagari,
        native_label: "हिंदी",
        examples: &[
            "सपने देखो और पूरे करो.",
            "सफलता आपकी है.",
            "खुशी खोजो.",
        ],
    },
    LanguageSpec {
        name: "Marathi",
        script: Script::Devanagari,
        native_label: "मराठी",
        examples: &[
            "स्वप्न पहा आणि साकार करा.",
            "यश तुमचे आहे.",
            "आनंद शोधा.",
        ],
    },
];

/// Look up a supported language by name. Unknown names return `None`;
/// callers degrade to instruction-free prompts rather than erroring.
pub fn language_spec(name: &str) -> Option<&'static LanguageSpec> {
    LANGUAGES.iter().find(|l| l.name == name)
}

/// The script a language is expected to use, when the language is known.
pub fn expected_script(name: &str) -> Option<Script> {
    language_spec(name).map(|l| l.script)
}

/// The ceil(n/2) / remainder split used for two-language selections.
pub fn two_language_split(count: usize) -> (usize, usize) {
    let first = count.div_ceil(2);
    (first, count - first)
}

/// Core language rule line for the requested count, by selection
/// cardinality.
pub fn language_rule(languages: &[String], count: usize) -> String {
    match languages {
        [] => String::new(),
        [only] => format!(
            "- Generate ALL {count} quotes EXCLUSIVELY in {only}. DO NOT use any other language."
        ),
        [first, second] => {
            let (first_count, second_count) = two_language_split(count);
            format!(
                "- Generate approximately {first_count} quotes in {first} and {second_count} quotes in {second}. DO NOT use any other languages."
            )
        }
        many => format!(
            "- Distribute the {count} quotes across {}, using each language at least once. DO NOT use any languages outside this list.",
            many.join(", ")
        ),
    }
}

/// Script rule line matching the selection.
///
/// A single known language gets an exclusive-script line prohibiting all
/// other supported scripts; multi-language selections get the combined
/// "appropriate scripts" line. Unknown single languages yield no rule.
pub fn script_rule(languages: &[String]) -> String {
    match languages {
        [] => String::new(),
        [only] => match language_spec(only) {
            Some(spec) => {
                let others = LANGUAGES
                    .iter()
                    .filter(|l| l.script != spec.script)
                    .map(|l| format!("NO {}", l.name))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "- ALL quotes MUST be in {} ({}). {}, NO other languages.",
                    spec.script.label(),
                    spec.name,
                    others
                )
            }
            None => String::new(),
        },
        many => {
            let uses_devanagari = many
                .iter()
                .any(|l| expected_script(l) == Some(Script::Devanagari));
            if uses_devanagari {
                "- Use appropriate scripts: Devanagari for Hindi/Marathi, Latin alphabet for English.".to_string()
            } else {
                "- Use appropriate scripts: Latin alphabet for English.".to_string()
            }
        }
    }
}

/// Rejection lines: languages and scripts outside the selection.
pub fn rejection_rules(languages: &[String]) -> String {
    let selected_scripts: Vec<Script> = languages
        .iter()
        .filter_map(|l| expected_script(l))
        .collect();

    let mut lines = Vec::new();
    for spec in LANGUAGES {
        if !languages.iter().any(|l| l == spec.name) {
            lines.push(format!("- ANY quotes in {}", spec.name));
        }
    }
    lines.push("- ANY quotes in Chinese or other languages".to_string());
    for script in [Script::Latin, Script::Devanagari] {
        if !selected_scripts.contains(&script) {
            lines.push(match script {
                Script::Latin => "- ANY quotes using Latin alphabet (a-z, A-Z)".to_string(),
                Script::Devanagari => {
                    "- ANY quotes using Devanagari script (देवनागरी)".to_string()
                }
            });
        }
    }
    lines.join("\n")
}

/// Acceptance lines: the selected languages, their scripts, and worked
/// examples.
pub fn acceptance_rules(languages: &[String]) -> String {
    let mut lines = Vec::new();
    for name in languages {
        if let Some(spec) = language_spec(name) {
            lines.push(format!("- Quotes written ONLY in {} language", spec.name));
            lines.push(format!(
                "- Using ONLY {} ({})",
                spec.script.label(),
                spec.native_label
            ));
            lines.push(format!(
                "- Example VALID quotes: {}",
                spec.examples
                    .iter()
                    .map(|e| format!("\"{}\"", e))
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_registry_covers_three_languages() {
        assert_eq!(LANGUAGES.len(), 3);
        assert_eq!(expected_script("English"), Some(Script::Latin));
        assert_eq!(expected_script("Hindi"), Some(Script::Devanagari));
        assert_eq!(expected_script("Marathi"), Some(Script::Devanagari));
        assert_eq!(expected_script("Klingon"), None);
    }

    #[test]
    fn test_single_language_rule_is_exclusive() {
        let rule = language_rule(&langs(&["Marathi"]), 4);
        assert_eq!(
            rule,
            "- Generate ALL 4 quotes EXCLUSIVELY in Marathi. DO NOT use any other language."
        );
    }

    #[test]
    fn test_two_language_rule_uses_ceil_split() {
        // 5 quotes across 2 languages: 3 in the first, 2 in the second.
        let rule = language_rule(&langs(&["English", "Hindi"]), 5);
        assert!(rule.contains("approximately 3 quotes in English"));
        assert!(rule.contains("2 quotes in Hindi"));

        // Even counts split evenly.
        let even = language_rule(&langs(&["English", "Hindi"]), 4);
        assert!(even.contains("approximately 2 quotes in English"));
        assert!(even.contains("2 quotes in Hindi"));
    }

    #[test]
    fn test_two_language_split_arithmetic() {
        assert_eq!(two_language_split(1), (1, 0));
        assert_eq!(two_language_split(2), (1, 1));
        assert_eq!(two_language_split(5), (3, 2));
        assert_eq!(two_language_split(6), (3, 3));
    }

    #[test]
    fn test_three_language_rule_requires_each_at_least_once() {
        let rule = language_rule(&langs(&["English", "Hindi", "Marathi"]), 6);
        assert!(rule.contains("across English, Hindi, Marathi"));
        assert!(rule.contains("each language at least once"));
    }

    #[test]
    fn test_single_language_script_rule_prohibits_other_scripts() {
        let english = script_rule(&langs(&["English"]));
        assert!(english.contains("Latin alphabet (English)"));
        assert!(english.contains("NO Hindi"));
        assert!(english.contains("NO Marathi"));

        let hindi = script_rule(&langs(&["Hindi"]));
        assert!(hindi.contains("Devanagari script (Hindi)"));
        assert!(hindi.contains("NO English"));
    }

    #[test]
    fn test_unknown_language_degrades_to_no_script_rule() {
        assert_eq!(script_rule(&langs(&["Spanish"])), "");
        let rule = language_rule(&langs(&["Spanish"]), 3);
        assert!(rule.contains("EXCLUSIVELY in Spanish"));
    }

    #[test]
    fn test_empty_selection_yields_empty_instructions() {
        assert_eq!(language_rule(&[], 4), "");
        assert_eq!(script_rule(&[]), "");
    }

    #[test]
    fn test_rejection_rules_exclude_selected_scripts() {
        let rules = rejection_rules(&langs(&["Marathi"]));
        assert!(rules.contains("- ANY quotes in English"));
        assert!(rules.contains("- ANY quotes in Hindi"));
        assert!(rules.contains("Latin alphabet (a-z, A-Z)"));
        assert!(!rules.contains("Devanagari script (देवनागरी)"));
    }

    #[test]
    fn test_rejection_rules_multi_language_prohibit_nothing_selected() {
        let rules = rejection_rules(&langs(&["English", "Hindi"]));
        assert!(rules.contains("- ANY quotes in Marathi"));
        // Both selected scripts stay permitted.
        assert!(!rules.contains("Latin alphabet (a-z, A-Z)"));
        assert!(!rules.contains("देवनागरी"));
    }

    #[test]
    fn test_acceptance_rules_carry_examples() {
        let rules = acceptance_rules(&langs(&["Marathi"]));
        assert!(rules.contains("ONLY in Marathi language"));
        assert!(rules.contains("स्वप्न पहा आणि साकार करा."));
    }

    #[test]
    fn test_instruction_builders_are_pure() {
        let selection = langs(&["Hindi", "English"]);
        assert_eq!(
            language_rule(&selection, 7),
            language_rule(&selection, 7)
        );
        assert_eq!(script_rule(&selection), script_rule(&selection));
    }
}
