//! User-facing settings consumed by the docblock engine.
//!
//! Field names follow the editor extension's keys (`alignTags`,
//! `notationMap`, ...). Every key is optional; missing keys take the
//! defaults below.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::notation::NotationRule;

/// Default tag used for return values.
pub const DEFAULT_RETURN_TAG: &str = "@return";

/// Column alignment applied to tag lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AlignTagsRepr", into = "String")]
pub enum AlignTags {
    /// Every column padded to its own widest entry.
    #[default]
    Deep,
    /// Only the first column (the tag name) is padded.
    Shallow,
    /// Tag lines are left untouched.
    None,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AlignTagsRepr {
    Flag(bool),
    Name(String),
}

impl TryFrom<AlignTagsRepr> for AlignTags {
    type Error = String;

    fn try_from(repr: AlignTagsRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            AlignTagsRepr::Flag(true) => Ok(Self::Shallow),
            AlignTagsRepr::Flag(false) => Ok(Self::None),
            AlignTagsRepr::Name(name) => match name.as_str() {
                "deep" => Ok(Self::Deep),
                "shallow" => Ok(Self::Shallow),
                "none" | "false" => Ok(Self::None),
                "true" => Ok(Self::Shallow),
                other => Err(format!(
                    "unknown alignTags value '{}', expected deep, shallow or none",
                    other
                )),
            },
        }
    }
}

impl From<AlignTags> for String {
    fn from(align: AlignTags) -> Self {
        match align {
            AlignTags::Deep => "deep",
            AlignTags::Shallow => "shallow",
            AlignTags::None => "none",
        }
        .to_string()
    }
}

/// Blank-line insertion between sections of the block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum SectionSpacer {
    #[default]
    None,
    /// `true`: a blank line before every run of a new tag name.
    BetweenSections,
    /// `"after_description"`: one blank line between description and tags.
    AfterDescription,
}

impl From<Value> for SectionSpacer {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(true) => Self::BetweenSections,
            Value::String(s) if s == "after_description" => Self::AfterDescription,
            Value::String(s) if s == "true" => Self::BetweenSections,
            _ => Self::None,
        }
    }
}

impl From<SectionSpacer> for Value {
    fn from(spacer: SectionSpacer) -> Self {
        match spacer {
            SectionSpacer::None => Value::Bool(false),
            SectionSpacer::BetweenSections => Value::Bool(true),
            SectionSpacer::AfterDescription => Value::String("after_description".to_string()),
        }
    }
}

/// Resolved settings for one engine instance.
///
/// # Example
///
/// ```
/// use docblock_config::{AlignTags, Settings};
/// use serde_json::json;
///
/// let settings = Settings::from_value(json!({
///     "alignTags": "shallow",
///     "returnTag": "@returns"
/// }))
/// .unwrap();
///
/// assert_eq!(settings.align_tags, AlignTags::Shallow);
/// assert_eq!(settings.return_tag, "@returns");
/// assert!(settings.function_description);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Spaces between the `*` prefix and the text of each inner line.
    pub indentation_spaces: usize,

    pub align_tags: AlignTags,

    /// Leave the return tag out of column width computation.
    pub per_section_indent: bool,

    pub min_spaces_between_columns: usize,

    pub function_description: bool,

    pub autoadd_method_tag: bool,

    /// Literal tag lines added to every function block.
    pub extra_tags: Vec<String>,

    /// Put `extraTags` after the parameter/return block instead of before it.
    pub extra_tags_go_after: bool,

    pub param_name: bool,

    pub param_description: bool,

    pub return_tag: String,

    pub return_description: bool,

    pub spacer_between_sections: SectionSpacer,

    pub newline_after_block: bool,

    pub notation_map: Vec<NotationRule>,

    /// Skip parsing and always emit the bare placeholder body.
    pub simple_mode: bool,

    /// Replaces `type` as the variable tag keyword (`@type`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_js_var: Option<String>,

    pub lower_case_primitives: bool,

    pub short_primitives: bool,

    /// Log filter used by front-ends when neither flags nor `RUST_LOG` set one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indentation_spaces: 1,
            align_tags: AlignTags::Deep,
            per_section_indent: false,
            min_spaces_between_columns: 1,
            function_description: true,
            autoadd_method_tag: false,
            extra_tags: Vec::new(),
            extra_tags_go_after: false,
            param_name: true,
            param_description: true,
            return_tag: DEFAULT_RETURN_TAG.to_string(),
            return_description: true,
            spacer_between_sections: SectionSpacer::None,
            newline_after_block: false,
            notation_map: Vec::new(),
            simple_mode: false,
            override_js_var: None,
            lower_case_primitives: false,
            short_primitives: false,
            log_level: None,
        }
    }
}

impl Settings {
    /// Every recognised key, spelled as in configuration files.
    pub const KEYS: &'static [&'static str] = &[
        "indentationSpaces",
        "alignTags",
        "perSectionIndent",
        "minSpacesBetweenColumns",
        "functionDescription",
        "autoaddMethodTag",
        "extraTags",
        "extraTagsGoAfter",
        "paramName",
        "paramDescription",
        "returnTag",
        "returnDescription",
        "spacerBetweenSections",
        "newlineAfterBlock",
        "notationMap",
        "simpleMode",
        "overrideJsVar",
        "lowerCasePrimitives",
        "shortPrimitives",
        "logLevel",
    ];

    /// Create from serde_json::Value (for programmatic config from an editor host)
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "settings".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "settings".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// The return tag to emit, falling back to `@return` when blank.
    pub fn return_tag(&self) -> &str {
        let tag = self.return_tag.trim();
        if tag.is_empty() {
            DEFAULT_RETURN_TAG
        } else {
            tag
        }
    }

    /// Match a key case-insensitively (ignoring `_`) against [`Settings::KEYS`].
    pub fn canonical_key(raw: &str) -> Option<&'static str> {
        let wanted: String = raw.chars().filter(|c| *c != '_' && *c != '-').collect();
        Self::KEYS
            .iter()
            .copied()
            .find(|key| key.eq_ignore_ascii_case(&wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn align_tags_accepts_booleans() {
        let settings = Settings::from_value(json!({ "alignTags": true })).unwrap();
        assert_eq!(settings.align_tags, AlignTags::Shallow);

        let settings = Settings::from_value(json!({ "alignTags": false })).unwrap();
        assert_eq!(settings.align_tags, AlignTags::None);
    }

    #[test]
    fn align_tags_rejects_unknown_names() {
        let err = Settings::from_value(json!({ "alignTags": "diagonal" })).unwrap_err();
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn spacer_variants() {
        let s = Settings::from_value(json!({ "spacerBetweenSections": true })).unwrap();
        assert_eq!(s.spacer_between_sections, SectionSpacer::BetweenSections);

        let s = Settings::from_value(json!({ "spacerBetweenSections": "after_description" }))
            .unwrap();
        assert_eq!(s.spacer_between_sections, SectionSpacer::AfterDescription);

        let s = Settings::from_value(json!({ "spacerBetweenSections": "sometimes" })).unwrap();
        assert_eq!(s.spacer_between_sections, SectionSpacer::None);
    }

    #[test]
    fn blank_return_tag_falls_back() {
        let s = Settings::from_value(json!({ "returnTag": "  " })).unwrap();
        assert_eq!(s.return_tag(), DEFAULT_RETURN_TAG);
    }

    #[test]
    fn round_trips_through_value() {
        let mut settings = Settings::default();
        settings.spacer_between_sections = SectionSpacer::AfterDescription;
        settings.override_js_var = Some("var".to_string());

        let value = settings.to_value().unwrap();
        assert_eq!(value["alignTags"], json!("deep"));
        assert_eq!(Settings::from_value(value).unwrap(), settings);
    }

    #[test]
    fn canonical_key_matches_env_spellings() {
        assert_eq!(Settings::canonical_key("ALIGN_TAGS"), Some("alignTags"));
        assert_eq!(Settings::canonical_key("aligntags"), Some("alignTags"));
        assert_eq!(Settings::canonical_key("unknown"), None);
    }
}
