//! Semantic checks that serde cannot express.

use crate::error::{ConfigError, Result};
use crate::notation::{compile_pattern, NotationMatcher};
use crate::settings::Settings;

/// Widest accepted value for the spacing settings.
pub const MAX_SPACING: usize = 16;

/// Validate resolved settings.
///
/// # Example
///
/// ```
/// use docblock_config::{validate, NotationRule, Settings};
///
/// let mut settings = Settings::default();
/// settings.notation_map.push(NotationRule::pattern("^(el|elem)$").with_type("HTMLElement"));
/// validate(&settings).unwrap();
///
/// settings.notation_map.push(NotationRule::pattern("(unclosed"));
/// assert!(validate(&settings).is_err());
/// ```
pub fn validate(settings: &Settings) -> Result<()> {
    let return_tag = settings.return_tag.trim();
    if return_tag.is_empty() {
        return Err(ConfigError::invalid_value("returnTag", "must not be empty"));
    }
    if !return_tag.starts_with('@') {
        return Err(ConfigError::invalid_value(
            "returnTag",
            format!("'{}' must start with '@' (e.g. @return or @returns)", return_tag),
        ));
    }

    if settings.indentation_spaces > MAX_SPACING {
        return Err(ConfigError::invalid_value(
            "indentationSpaces",
            format!("{} exceeds the maximum of {}", settings.indentation_spaces, MAX_SPACING),
        ));
    }

    if settings.min_spaces_between_columns > MAX_SPACING {
        return Err(ConfigError::invalid_value(
            "minSpacesBetweenColumns",
            format!(
                "{} exceeds the maximum of {}",
                settings.min_spaces_between_columns, MAX_SPACING
            ),
        ));
    }

    if let Some(keyword) = &settings.override_js_var {
        if keyword.trim().is_empty() || keyword.contains(char::is_whitespace) {
            return Err(ConfigError::invalid_value(
                "overrideJsVar",
                "must be a single tag keyword such as 'var'",
            ));
        }
    }

    for rule in &settings.notation_map {
        if let NotationMatcher::Pattern(pattern) = &rule.matcher {
            compile_pattern(pattern).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        }
    }

    Ok(())
}
