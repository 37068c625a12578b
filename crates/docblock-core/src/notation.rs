//! Evaluates `notationMap` rules against identifier names.

use docblock_config::{compile_pattern, NotationMatcher, NotationRule};
use tracing::warn;

use crate::error::{EngineError, Result};

/// Whether `rule` selects `name`.
///
/// Prefix rules need the name to start with the prefix; when the prefix ends
/// in a lowercase letter the next character must be uppercase, `_`, or the
/// end of the name, so `is` matches `isReady` but not `issue`.
pub fn rule_matches(rule: &NotationRule, name: &str) -> Result<bool> {
    match &rule.matcher {
        NotationMatcher::Prefix(prefix) => Ok(prefix_matches(prefix, name)),
        NotationMatcher::Pattern(pattern) => compile_pattern(pattern)
            .map(|re| re.is_match(name))
            .map_err(|e| EngineError::invalid_notation_pattern(pattern, &e)),
        NotationMatcher::Never => Ok(false),
    }
}

fn prefix_matches(prefix: &str, name: &str) -> bool {
    let Some(rest) = name.strip_prefix(prefix) else {
        return false;
    };
    if !prefix.ends_with(|c: char| c.is_ascii_lowercase()) {
        return true;
    }
    match rest.chars().next() {
        None => true,
        Some(c) => c.is_ascii_uppercase() || c == '_',
    }
}

/// Every rule that matches `name`, in configuration order.
///
/// Rules whose pattern does not compile are logged and never match.
pub fn matching<'r>(rules: &'r [NotationRule], name: &str) -> Vec<&'r NotationRule> {
    rules
        .iter()
        .filter(|rule| match rule_matches(rule, name) {
            Ok(matched) => matched,
            Err(err) => {
                warn!("skipping notation rule: {}", err);
                false
            }
        })
        .collect()
}
