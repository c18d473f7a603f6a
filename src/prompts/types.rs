//! Domain records flowing through prompt construction.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Goal identifier.
///
/// The upstream wizard sends timestamps (JSON numbers) for custom goals and
/// strings elsewhere; both normalize to the string form used as the key of
/// per-goal response maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The normalized string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for GoalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(serde_json::Number),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => GoalId(n.to_string()),
            Raw::Str(s) => GoalId(s),
        })
    }
}

/// A single user-selected aspiration item.
///
/// `title` doubles as the natural-language key for prompt substitution;
/// `id` is the identity carried through per-goal response maps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    #[serde(default)]
    pub emoji: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Goal {
    /// Convenience constructor used heavily in tests.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: GoalId::new(id),
            emoji: None,
            title: title.into(),
            description: None,
        }
    }
}

/// One per-goal image generation record: the prompt to send and the quote
/// to display alongside the finished image (never rendered into pixels).
#[derive(Debug, Clone, Serialize)]
pub struct GoalPrompt {
    pub goal_id: GoalId,
    pub prompt: String,
    pub quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_id_accepts_numbers_and_strings() {
        let from_int: GoalId = serde_json::from_str("1716822893412").unwrap();
        assert_eq!(from_int.as_str(), "1716822893412");

        let from_float: GoalId = serde_json::from_str("1716822893412.5").unwrap();
        assert_eq!(from_float.as_str(), "1716822893412.5");

        let from_str: GoalId = serde_json::from_str("\"goal-7\"").unwrap();
        assert_eq!(from_str.as_str(), "goal-7");
    }

    #[test]
    fn test_goal_deserializes_with_optional_fields() {
        let goal: Goal =
            serde_json::from_str(r#"{"id": 3, "title": "Peak Fitness"}"#).unwrap();
        assert_eq!(goal.id.as_str(), "3");
        assert_eq!(goal.title, "Peak Fitness");
        assert!(goal.emoji.is_none());
        assert!(goal.description.is_none());

        let full: Goal = serde_json::from_str(
            r#"{"id": "a", "emoji": "💪", "title": "Peak Fitness", "description": "Achieve my ideal body"}"#,
        )
        .unwrap();
        assert_eq!(full.emoji.as_deref(), Some("💪"));
        assert_eq!(full.description.as_deref(), Some("Achieve my ideal body"));
    }

    #[test]
    fn test_goal_id_serializes_transparently() {
        let goal = Goal::new("42", "Savings");
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["id"], "42");
    }
}
