//! Per-invocation pipeline: extractor, parser, formatter, assembler.

use std::sync::{Arc, LazyLock};

use chrono::{DateTime, FixedOffset, Local};
use docblock_config::Settings;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::extractor::MAX_LOOKAHEAD_LINES;
use crate::format::TagFormatter;
use crate::model::Parsed;
use crate::parser::{parse, ParserRegistry};
use crate::snippet::escape;
use crate::template::Template;

static TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:/\*|###)[*!]\s*$").expect("trigger pattern is valid"));

static EXISTING_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*").expect("comment body pattern is valid"));

static TRAILING_CLOSER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\*/\s*$").expect("closer pattern is valid"));

/// Whether the text before the cursor opens a doc block (`/**`, `/*!`, `###*`).
pub fn is_trigger(preceding: &str) -> bool {
    TRIGGER.is_match(preceding)
}

/// Whether `line` is the body of an existing block comment.
pub fn is_existing_comment(line: &str) -> bool {
    EXISTING_COMMENT.is_match(line)
}

/// Trim, drop a trailing `*/`, and snippet-escape text found after the cursor.
pub fn normalize_trailing(trailing: &str) -> String {
    escape(&TRAILING_CLOSER.replace(trailing.trim(), ""))
}

/// Everything one run needs to know about where it was triggered.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Language identifier used to pick the parser.
    pub language: String,
    /// Lines following the trigger line.
    pub lookahead: Vec<String>,
    /// Raw text after the cursor on the trigger line.
    pub trailing: String,
    /// Produce a single-line fragment.
    pub inline: bool,
    /// The cursor is already inside a comment body.
    pub inside_comment: bool,
    /// Leading whitespace of the trigger line.
    pub base_indent: String,
    /// Clock override for `{{date}}` variables.
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl Invocation {
    pub fn new<I, S>(language: impl Into<String>, lookahead: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            language: language.into(),
            lookahead: lookahead
                .into_iter()
                .take(MAX_LOOKAHEAD_LINES)
                .map(Into::into)
                .collect(),
            ..Default::default()
        }
    }

    pub fn with_trailing(mut self, trailing: impl Into<String>) -> Self {
        self.trailing = trailing.into();
        self
    }

    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn with_inside_comment(mut self, inside_comment: bool) -> Self {
        self.inside_comment = inside_comment;
        self
    }

    pub fn with_base_indent(mut self, indent: impl Into<String>) -> Self {
        self.base_indent = indent.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    /// Snippet text to insert after the trigger.
    pub text: String,
    /// What the declaration was recognised as; `None` when parsing was skipped
    /// because the cursor was inside a comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Parsed>,
}

/// The doc block generator.
///
/// Holds read-only settings and the parser registry. All per-run state lives
/// in the [`Invocation`], so one instance can serve concurrent runs.
///
/// # Example
///
/// ```
/// use docblock_config::Settings;
/// use docblock_core::{DocBlockr, Invocation};
///
/// let engine = DocBlockr::new(Settings::default());
/// let output = engine.run(&Invocation::new("javascript", ["function add(a, b) {"]));
///
/// assert!(output.text.contains("@param"));
/// assert!(output.text.ends_with(" */"));
/// ```
#[derive(Debug, Clone)]
pub struct DocBlockr {
    settings: Arc<Settings>,
    registry: ParserRegistry,
}

impl DocBlockr {
    pub fn new(settings: Settings) -> Self {
        Self::with_registry(settings, ParserRegistry::default())
    }

    pub fn with_registry(settings: Settings, registry: ParserRegistry) -> Self {
        Self {
            settings: Arc::new(settings),
            registry,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Swap in new settings for subsequent runs.
    pub fn reload(&mut self, settings: Settings) {
        self.settings = Arc::new(settings);
    }

    pub fn run(&self, invocation: &Invocation) -> Output {
        let settings = self.settings.as_ref();

        if invocation.inside_comment {
            return Output {
                text: format!(
                    "\n{} *{}",
                    invocation.base_indent,
                    " ".repeat(settings.indentation_spaces)
                ),
                parsed: None,
            };
        }

        let parser = self.registry.resolve(&invocation.language);
        let trailing = normalize_trailing(&invocation.trailing);

        let parsed = if settings.simple_mode {
            Parsed::NoMatch
        } else {
            let declaration = parser.definition(&invocation.lookahead);
            debug!(parser = parser.name(), declaration = %declaration, "recovered declaration");
            parse(parser.as_ref(), &declaration)
        };

        let lines = TagFormatter::new(parser.as_ref(), settings)
            .description(Some(trailing.as_str()))
            .inline(invocation.inline)
            .format(&parsed);

        let template = Template::new(settings, parser.settings())
            .inline(invocation.inline)
            .base_indent(&invocation.base_indent)
            .at(invocation
                .timestamp
                .unwrap_or_else(|| Local::now().fixed_offset()));
        let text = template.assemble(lines, &trailing);

        Output {
            text,
            parsed: Some(parsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers() {
        assert!(is_trigger("/**"));
        assert!(is_trigger("    /*!  "));
        assert!(is_trigger("###*"));
        assert!(!is_trigger("/*"));
        assert!(!is_trigger("x = 1 /**"));
    }

    #[test]
    fn existing_comment_lines() {
        assert!(is_existing_comment("   * @param"));
        assert!(!is_existing_comment("   /**"));
    }

    #[test]
    fn trailing_text_is_normalised() {
        assert_eq!(normalize_trailing("  Costs $5 */ "), r"Costs \$5");
        assert_eq!(normalize_trailing("*/"), "");
    }

    #[test]
    fn inside_comment_short_circuits() {
        let mut settings = Settings::default();
        settings.indentation_spaces = 2;
        let engine = DocBlockr::new(settings);
        let out = engine.run(
            &Invocation::new("js", ["function ignored(a) {"])
                .with_inside_comment(true)
                .with_base_indent("  "),
        );
        assert_eq!(out.text, "\n   *  ");
        assert_eq!(out.parsed, None);
    }

    #[test]
    fn reload_replaces_settings() {
        let mut engine = DocBlockr::new(Settings::default());
        let mut settings = Settings::default();
        settings.simple_mode = true;
        engine.reload(settings);

        let out = engine.run(&Invocation::new("js", ["function add(a, b) {"]));
        assert_eq!(out.parsed, Some(Parsed::NoMatch));
        assert_eq!(out.text, "\n * ${0:}\n */");
    }
}
