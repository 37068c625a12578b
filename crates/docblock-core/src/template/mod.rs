//! Assembles tag lines into the final snippet text.
//!
//! Passes run in order: variable substitution, column alignment,
//! placeholder renumbering, section spacing. Composition then adds the
//! comment prefix, indentation and closer.

mod align;
mod spacing;
mod variables;

pub use align::align;
pub use spacing::apply as apply_spacing;
pub use variables::substitute as substitute_variables;

use chrono::{DateTime, FixedOffset, Local};
use docblock_config::Settings;

use crate::parser::ParserSettings;
use crate::snippet;

/// Final assembly for one invocation.
pub struct Template<'a> {
    settings: &'a Settings,
    parser: &'a ParserSettings,
    inline: bool,
    base_indent: &'a str,
    now: DateTime<FixedOffset>,
}

impl<'a> Template<'a> {
    pub fn new(settings: &'a Settings, parser: &'a ParserSettings) -> Self {
        Self {
            settings,
            parser,
            inline: false,
            base_indent: "",
            now: Local::now().fixed_offset(),
        }
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Leading whitespace of the line the block is inserted on.
    pub fn base_indent(mut self, indent: &'a str) -> Self {
        self.base_indent = indent;
        self
    }

    /// Timestamp used for `{{date}}` and `{{datetime}}`.
    pub fn at(mut self, now: DateTime<FixedOffset>) -> Self {
        self.now = now;
        self
    }

    /// Run every pass and compose the text inserted after the trigger.
    ///
    /// `trailing` is the escaped text found after the cursor; it becomes the
    /// final cursor stop when there are no tag lines.
    pub fn assemble(&self, mut lines: Vec<String>, trailing: &str) -> String {
        substitute_variables(&mut lines, &self.now);
        if !self.inline {
            align(&mut lines, self.settings);
        }
        snippet::renumber(&mut lines);

        if self.inline {
            let closer = self.parser.comment_closer.trim();
            return match lines.first() {
                Some(line) => format!(" {} {}", line, closer),
                None => format!(" $0 {}", closer),
            };
        }

        let lines = apply_spacing(lines, self.settings.spacer_between_sections);
        self.compose(&lines, trailing)
    }

    fn compose(&self, lines: &[String], trailing: &str) -> String {
        let indent = " ".repeat(self.settings.indentation_spaces);
        let prefix = format!("\n{} {}", self.base_indent, self.parser.comment_prefix);

        let mut out = String::new();
        if lines.is_empty() {
            out.push_str(&prefix);
            out.push_str(&indent);
            out.push_str(&format!("${{0:{}}}", trailing));
        }
        for line in lines {
            out.push_str(&prefix);
            if !line.is_empty() {
                out.push_str(&indent);
                out.push_str(line);
            }
        }

        out.push('\n');
        out.push_str(self.base_indent);
        out.push_str(self.parser.comment_closer);
        if self.settings.newline_after_block {
            out.push('\n');
        }
        out
    }
}
