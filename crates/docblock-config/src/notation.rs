//! Naming-convention rules (`notationMap`).
//!
//! A rule either matches identifiers by a literal prefix or by a regular
//! expression, may imply a type, and may contribute extra tag lines to every
//! function whose name it matches.
//!
//! ```
//! use docblock_config::{NotationMatcher, NotationRule};
//! use serde_json::json;
//!
//! let rule: NotationRule = serde_json::from_value(json!({
//!     "prefix": "$",
//!     "type": "jQuery"
//! }))
//! .unwrap();
//!
//! assert_eq!(rule.matcher, NotationMatcher::Prefix("$".to_string()));
//! assert_eq!(rule.implied_type.as_deref(), Some("jQuery"));
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a [`NotationRule`] selects identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationMatcher {
    /// Literal prefix, with a camelCase boundary when it ends in a lowercase letter.
    Prefix(String),
    /// Case-insensitive regular expression searched anywhere in the name.
    Pattern(String),
    /// Neither `prefix` nor `regex` was configured; never matches.
    Never,
}

/// One entry of the `notationMap` setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNotationRule", into = "RawNotationRule")]
pub struct NotationRule {
    pub matcher: NotationMatcher,
    /// Type implied for matching names. May name a parser setting such as `bool`.
    pub implied_type: Option<String>,
    /// Tag lines appended to the block of every matching function.
    pub tags: Vec<String>,
}

impl NotationRule {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::with_matcher(NotationMatcher::Prefix(prefix.into()))
    }

    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::with_matcher(NotationMatcher::Pattern(pattern.into()))
    }

    fn with_matcher(matcher: NotationMatcher) -> Self {
        Self {
            matcher,
            implied_type: None,
            tags: Vec::new(),
        }
    }

    pub fn with_type(mut self, implied_type: impl Into<String>) -> Self {
        self.implied_type = Some(implied_type.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Compile a `regex` matcher the way rules are evaluated (case-insensitive).
pub fn compile_pattern(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!("(?i){}", pattern))
}

/// On-disk shape of a rule: `{ prefix?, regex?, type?, tags? }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawNotationRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    regex: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    implied_type: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

impl From<RawNotationRule> for NotationRule {
    fn from(raw: RawNotationRule) -> Self {
        let matcher = match (raw.prefix, raw.regex) {
            (Some(prefix), _) if !prefix.is_empty() => NotationMatcher::Prefix(prefix),
            (_, Some(regex)) if !regex.is_empty() => NotationMatcher::Pattern(regex),
            _ => NotationMatcher::Never,
        };

        Self {
            matcher,
            implied_type: raw.implied_type,
            tags: raw.tags,
        }
    }
}

impl From<NotationRule> for RawNotationRule {
    fn from(rule: NotationRule) -> Self {
        let mut raw = RawNotationRule {
            implied_type: rule.implied_type,
            tags: rule.tags,
            ..Default::default()
        };
        match rule.matcher {
            NotationMatcher::Prefix(prefix) => raw.prefix = Some(prefix),
            NotationMatcher::Pattern(regex) => raw.regex = Some(regex),
            NotationMatcher::Never => {}
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefix_wins_over_regex() {
        let rule: NotationRule =
            serde_json::from_value(json!({ "prefix": "is", "regex": "^has" })).unwrap();
        assert_eq!(rule.matcher, NotationMatcher::Prefix("is".to_string()));
    }

    #[test]
    fn rule_without_matcher_never_matches() {
        let rule: NotationRule =
            serde_json::from_value(json!({ "type": "Element", "tags": ["@dom"] })).unwrap();
        assert_eq!(rule.matcher, NotationMatcher::Never);
        assert_eq!(rule.tags, vec!["@dom".to_string()]);
    }

    #[test]
    fn serializes_back_to_raw_shape() {
        let rule = NotationRule::pattern("^_").with_tags(["@private"]);
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value, json!({ "regex": "^_", "tags": ["@private"] }));
    }

    #[test]
    fn compiled_patterns_ignore_case() {
        let re = compile_pattern("^el").unwrap();
        assert!(re.is_match("ELement"));
    }
}
