//! Language-specific declaration parsing.
//!
//! Each language supplies a [`DeclarationParser`]. The trait's provided
//! methods carry the behaviour shared by every language (argument splitting,
//! return-type policy, declaration extraction); implementations override
//! them where their syntax differs.

mod coffee;
mod javascript;
mod registry;

pub use coffee::CoffeeParser;
pub use javascript::JavascriptParser;
pub use registry::ParserRegistry;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::extractor;
use crate::infer::{PrimitiveStyle, TypeInferencer, PREDICATE_NAME};
use crate::model::{Argument, Parsed, ParsedFunction, ParsedVariable};
use crate::splitter::split_by_commas;

/// Longest declaration handed to the language patterns.
pub const MAX_DECLARATION_BYTES: usize = 16 * 1024;

static INLINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*.*?\*/").expect("inline comment pattern is valid"));

static CONSTRUCTOR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]").expect("constructor name pattern is valid"));

static MUTATOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[$_]?(?:set|add)[A-Z_]").expect("mutator name pattern is valid")
});

/// Fixed per-language properties.
#[derive(Debug, Clone)]
pub struct ParserSettings {
    /// Emit `{type}` on tags.
    pub type_info: bool,
    /// Wrap types in braces.
    pub curly_types: bool,
    /// Keyword of the variable tag (`@type`).
    pub type_tag: &'static str,
    /// Marker starting every inner line.
    pub comment_prefix: &'static str,
    /// Line that closes a block.
    pub comment_closer: &'static str,
    /// Marks where a function declaration starts on the first lookahead line.
    pub fn_opener: Option<Regex>,
    pub bool_type: &'static str,
    pub function_type: &'static str,
}

impl ParserSettings {
    /// Resolve a settings key named by a notation rule's `type`.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        match key {
            "bool" => Some(self.bool_type),
            "function" => Some(self.function_type),
            "typeTag" => Some(self.type_tag),
            _ => None,
        }
    }
}

/// What to put on a function's return tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    /// No return tag at all.
    Suppressed,
    Known(String),
    /// Emit the tag with a `[type]` placeholder.
    Unknown,
}

/// Strategy for one source language.
pub trait DeclarationParser: Send + Sync {
    /// Identifier used in log output.
    fn name(&self) -> &'static str;

    fn settings(&self) -> &ParserSettings;

    fn parse_function(&self, declaration: &str) -> Option<ParsedFunction>;

    fn parse_var(&self, declaration: &str) -> Option<ParsedVariable>;

    fn guess_type_from_value(&self, value: &str, style: PrimitiveStyle) -> Option<String>;

    /// Expand one parameter token into documented arguments.
    fn arg_info(&self, arg: &str, _infer: &TypeInferencer<'_>) -> Vec<Argument> {
        vec![Argument::new(arg, None)]
    }

    /// Split a raw parameter list into documented arguments.
    fn parse_args(&self, raw_args: &str, infer: &TypeInferencer<'_>) -> Vec<Argument> {
        let cleaned = INLINE_COMMENT.replace_all(raw_args, "");
        split_by_commas(&cleaned)
            .iter()
            .filter(|token| !token.is_empty())
            .flat_map(|token| self.arg_info(token, infer))
            .collect()
    }

    /// Decide the return tag of a function.
    ///
    /// Generators, constructors (capitalized names) and `set`/`add`
    /// mutators get none; `is`/`has` predicates return the boolean type.
    fn return_type(&self, function: &ParsedFunction, infer: &TypeInferencer<'_>) -> ReturnType {
        let name = function.name.as_str();
        if function.is_generator || CONSTRUCTOR_NAME.is_match(name) {
            return ReturnType::Suppressed;
        }
        if let Some(hint) = function.return_hint.as_deref() {
            return match hint {
                "void" | "undefined" | "never" => ReturnType::Suppressed,
                other => ReturnType::Known(other.to_string()),
            };
        }
        if MUTATOR_NAME.is_match(name) {
            return ReturnType::Suppressed;
        }
        if PREDICATE_NAME.is_match(name) {
            return ReturnType::Known(infer.bool_type());
        }
        infer
            .from_name(name)
            .map(ReturnType::Known)
            .unwrap_or(ReturnType::Unknown)
    }

    /// Join lookahead lines into the declaration this parser should see.
    fn definition(&self, lines: &[String]) -> String {
        extractor::definition(lines, self.settings().fn_opener.as_ref())
    }
}

/// Parse a declaration, trying function forms before variable forms.
pub fn try_parse(parser: &dyn DeclarationParser, declaration: &str) -> Result<Parsed> {
    let declaration = declaration.trim();
    if declaration.len() > MAX_DECLARATION_BYTES {
        return Err(EngineError::DeclarationTooLong {
            len: declaration.len(),
            max: MAX_DECLARATION_BYTES,
        });
    }
    if declaration.is_empty() {
        return Ok(Parsed::NoMatch);
    }

    if let Some(function) = parser.parse_function(declaration) {
        return Ok(Parsed::Function(function));
    }
    if let Some(variable) = parser.parse_var(declaration) {
        return Ok(Parsed::Variable(variable));
    }
    Ok(Parsed::NoMatch)
}

/// Byte index of the first character at bracket depth zero, outside string
/// literals, for which `hit` returns true. `hit` sees the character before
/// depth is updated, so a closer that would go below zero can be found.
pub(crate) fn find_top_level(text: &str, mut hit: impl FnMut(usize, char) -> bool) -> Option<usize> {
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if let Some(q) = quote {
            match ch {
                '\\' => escaped = true,
                c if c == q => quote = None,
                _ => {}
            }
            continue;
        }
        if depth == 0 && hit(idx, ch) {
            return Some(idx);
        }
        match ch {
            '"' | '\'' | '`' => quote = Some(ch),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

/// Initializer text up to the first top-level `;` or `,`.
pub(crate) fn value_expression(text: &str) -> &str {
    let end = find_top_level(text, |_, ch| ch == ';' || ch == ',').unwrap_or(text.len());
    text[..end].trim()
}

/// [`try_parse`], degrading failures to [`Parsed::NoMatch`].
pub fn parse(parser: &dyn DeclarationParser, declaration: &str) -> Parsed {
    match try_parse(parser, declaration) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(parser = parser.name(), "declaration not parsed: {}", err);
            Parsed::NoMatch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docblock_config::{NotationRule, Settings};

    #[test]
    fn oversized_declaration_degrades_to_no_match() {
        let parser = JavascriptParser::new();
        let declaration = format!("var x = '{}';", "a".repeat(MAX_DECLARATION_BYTES));
        assert!(matches!(
            try_parse(&parser, &declaration),
            Err(EngineError::DeclarationTooLong { .. })
        ));
        assert_eq!(parse(&parser, &declaration), Parsed::NoMatch);
    }

    #[test]
    fn return_policy() {
        let parser = JavascriptParser::new();
        let settings = Settings::default();
        let infer = TypeInferencer::new(&parser, &settings);
        let ret = |name: &str| parser.return_type(&ParsedFunction::new(name, ""), &infer);

        assert_eq!(ret("Widget"), ReturnType::Suppressed);
        assert_eq!(ret("setValue"), ReturnType::Suppressed);
        assert_eq!(ret("_addItem"), ReturnType::Suppressed);
        assert_eq!(ret("isReady"), ReturnType::Known("Boolean".to_string()));
        assert_eq!(ret("hasItems"), ReturnType::Known("Boolean".to_string()));
        assert_eq!(ret("settle"), ReturnType::Unknown);
        assert_eq!(ret("add"), ReturnType::Unknown);
        assert_eq!(ret("issue"), ReturnType::Unknown);
        assert_eq!(ret("compute"), ReturnType::Unknown);

        let generator = ParsedFunction::new("items", "").generator(true);
        assert_eq!(parser.return_type(&generator, &infer), ReturnType::Suppressed);
    }

    #[test]
    fn return_hint_wins_over_name() {
        let parser = JavascriptParser::new();
        let settings = Settings::default();
        let infer = TypeInferencer::new(&parser, &settings);

        let hinted = ParsedFunction::new("setup", "").with_return_hint(Some("Promise<void>".into()));
        assert_eq!(
            parser.return_type(&hinted, &infer),
            ReturnType::Known("Promise<void>".to_string())
        );
        let void = ParsedFunction::new("run", "").with_return_hint(Some("void".into()));
        assert_eq!(parser.return_type(&void, &infer), ReturnType::Suppressed);
    }

    #[test]
    fn notation_type_resolves_parser_keys() {
        let parser = JavascriptParser::new();
        let mut settings = Settings::default();
        settings
            .notation_map
            .push(NotationRule::prefix("should").with_type("bool"));
        let infer = TypeInferencer::new(&parser, &settings);

        assert_eq!(infer.from_name("shouldRender").as_deref(), Some("Boolean"));
        assert_eq!(infer.from_name("callback").as_deref(), Some("Function"));
        assert_eq!(infer.from_name("widget"), None);
    }

    #[test]
    fn value_expression_stops_at_top_level_separator() {
        assert_eq!(value_expression("'a, b'; var c"), "'a, b'");
        assert_eq!(value_expression("f(1, 2), g"), "f(1, 2)");
        assert_eq!(value_expression("  5  "), "5");
    }

    #[test]
    fn parse_args_drops_empty_tokens_and_comments() {
        let parser = CoffeeParser::new();
        let settings = Settings::default();
        let infer = TypeInferencer::new(&parser, &settings);

        let args = parser.parse_args("a /* first */, b,", &infer);
        let names: Vec<_> = args.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(parser.parse_args("", &infer).is_empty());
    }
}
