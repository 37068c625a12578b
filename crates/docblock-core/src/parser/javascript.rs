//! JavaScript and TypeScript declarations.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{find_top_level, value_expression, DeclarationParser, ParserSettings};
use crate::infer::{self, PrimitiveStyle, TypeInferencer, ValueRules};
use crate::model::{Argument, ParsedFunction, ParsedVariable};
use crate::splitter::split_by_commas;

const IDENTIFIER: &str = r"[a-zA-Z_$][a-zA-Z_$0-9]*";

const VALUE_RULES: ValueRules = ValueRules {
    arrow_is_function: true,
    short_booleans: true,
};

/// Method-shorthand names that are really statements.
const KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "with", "return", "function", "else",
];

fn compile(template: &str) -> Regex {
    Regex::new(&template.replace("IDENT", IDENTIFIER))
        .expect("javascript declaration pattern is valid")
}

static OPENER: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?:function[\s*]*(?:IDENT)?\s*\(|(?:IDENT|\(.*\)\s*=>)|(?:IDENT\s*\(.*\)\s*\{))")
});

/// `function name(`, `name = function* (`, `name: async function(`
static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?:(?P<assigned>IDENT)\s*[:=]\s*)?(?:async\s+)?\bfunction\b(?P<generator>[\s*]*)(?P<declared>IDENT)?\s*\(",
    )
});

/// `x =>`, `(a, b) =>`, `export const name = async (a): T =>`, `this.on = e =>`
///
/// Anchored, so an arrow callback inside an initializer is not mistaken for
/// the declaration.
static ARROW: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?:(?:export|default|const|let|var|static|public|private|protected|readonly)\s+)*(?:(?:IDENT\.)*(?P<assigned>IDENT)\s*[:=]\s*)?(?:async\b\s*)?(?:(?P<arg>IDENT)|\((?P<args>.*)\))\s*(?::\s*(?P<ret>[^=()]+?)\s*)?=>",
    )
});

/// `name(a) {`, `*items() {`, `set value(v) {`
static METHOD: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?:\b(?P<accessor>get|set)\s+)?(?P<star>\*\s*)?(?P<name>IDENT)\s*\((?P<args>.*)\)\s*(?::\s*(?P<ret>[^{]+?)\s*)?\{",
    )
});

/// `): Type {` after a parameter list.
static RETURN_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^\s*:\s*(?P<ret>[^{=;]+?)\s*(?:\{|=>|;|$)")
});

/// `let name: Type = value`
static TYPED_VAR: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?:export\s+)?(?:declare\s+)?(?:let|const|var)\s+(?P<name>IDENT)\s*:\s*(?P<type>[^=;]+?)\s*(?P<rest>[=;].*)?$",
    )
});

/// `let name;`
static BARE_VAR: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:export\s+)?(?:let|var)\s+(?P<name>IDENT)\s*;?$")
});

static VAR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?P<name>IDENT)\s*[=:]\s*(?P<val>.*)$"));

/// Parser for `.js`, `.ts` and their JSX variants.
#[derive(Debug, Clone)]
pub struct JavascriptParser {
    settings: ParserSettings,
}

impl Default for JavascriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JavascriptParser {
    /// Language identifiers served by this parser.
    pub const LANGUAGES: &'static [&'static str] = &[
        "javascript",
        "typescript",
        "javascriptreact",
        "typescriptreact",
        "js",
        "ts",
        "jsx",
        "tsx",
        "mjs",
        "cjs",
    ];

    pub fn new() -> Self {
        Self {
            settings: ParserSettings {
                type_info: true,
                curly_types: true,
                type_tag: "type",
                comment_prefix: "*",
                comment_closer: " */",
                fn_opener: Some(OPENER.clone()),
                bool_type: "Boolean",
                function_type: "Function",
            },
        }
    }

    fn named_function(&self, declaration: &str) -> Option<ParsedFunction> {
        let caps = FUNCTION.captures(declaration)?;
        let end = caps.get(0)?.end();
        let (args, after) = split_params(&declaration[end..]);

        let name = group(&caps, "assigned")
            .or_else(|| group(&caps, "declared"))
            .unwrap_or_default();
        let is_generator = group(&caps, "generator").is_some_and(|g| g.contains('*'));

        Some(
            ParsedFunction::new(name, args.trim())
                .generator(is_generator)
                .with_return_hint(after.and_then(return_annotation)),
        )
    }

    fn arrow_function(&self, declaration: &str) -> Option<ParsedFunction> {
        let caps = ARROW.captures(declaration)?;
        let name = group(&caps, "assigned").unwrap_or_default();

        if let Some(arg) = group(&caps, "arg") {
            return Some(ParsedFunction::new(name, arg));
        }

        let captured = group(&caps, "args").unwrap_or_default();
        let (args, after) = split_params(captured);
        if args.matches('(').count() != args.matches(')').count() {
            return None;
        }
        let hint = match after {
            Some(rest) => return_annotation(rest),
            None => group(&caps, "ret").map(str::to_string),
        };
        Some(ParsedFunction::new(name, args.trim()).with_return_hint(hint))
    }

    fn method(&self, declaration: &str) -> Option<ParsedFunction> {
        let caps = METHOD.captures(declaration)?;
        let name = group(&caps, "name")?;
        if KEYWORDS.contains(&name) {
            return None;
        }

        let (args, after) = split_params(group(&caps, "args").unwrap_or_default());
        let hint = match after {
            Some(rest) => return_annotation(rest),
            None => group(&caps, "ret").map(str::to_string),
        };

        Some(
            ParsedFunction::new(name, args.trim())
                .generator(caps.name("star").is_some())
                .setter_like(group(&caps, "accessor") == Some("set"))
                .with_return_hint(hint),
        )
    }
}

impl DeclarationParser for JavascriptParser {
    fn name(&self) -> &'static str {
        "javascript"
    }

    fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    fn parse_function(&self, declaration: &str) -> Option<ParsedFunction> {
        self.named_function(declaration)
            .or_else(|| self.arrow_function(declaration))
            .or_else(|| self.method(declaration))
    }

    fn parse_var(&self, declaration: &str) -> Option<ParsedVariable> {
        if let Some(caps) = TYPED_VAR.captures(declaration) {
            let value = group(&caps, "rest")
                .and_then(|rest| rest.strip_prefix('='))
                .map(value_expression)
                .unwrap_or_default();
            return Some(
                ParsedVariable::new(&caps["name"], value)
                    .with_type_hint(Some(caps["type"].trim().to_string())),
            );
        }
        if let Some(caps) = BARE_VAR.captures(declaration) {
            return Some(ParsedVariable::new(&caps["name"], ""));
        }

        let caps = VAR.captures(declaration)?;
        Some(ParsedVariable::new(
            &caps["name"],
            value_expression(&caps["val"]),
        ))
    }

    fn guess_type_from_value(&self, value: &str, style: PrimitiveStyle) -> Option<String> {
        infer::guess_from_value(value, style, VALUE_RULES)
    }

    /// Destructured objects become `options.*` entries; `...rest`, defaults
    /// and TypeScript annotations contribute the type.
    fn arg_info(&self, arg: &str, infer: &TypeInferencer<'_>) -> Vec<Argument> {
        let arg = arg.trim();

        if let Some(inner) = arg.strip_prefix('{').and_then(|a| a.strip_suffix('}')) {
            return split_by_commas(inner)
                .iter()
                .filter(|item| !item.is_empty())
                .map(|item| {
                    let (pattern, default) = split_default(item);
                    let key = pattern.split(':').next().unwrap_or(pattern).trim();
                    let key = key.trim_start_matches("...");
                    Argument::new(
                        format!("options.{}", key),
                        default.and_then(|d| infer.from_value(d)),
                    )
                })
                .collect();
        }

        let (pattern, default) = split_default(arg);
        let (pattern, annotation) = split_annotation(pattern);
        let is_rest = pattern.starts_with("...");
        let name = pattern.trim_start_matches("...").trim_end_matches('?').trim();

        let arg_type = if is_rest {
            let element = annotation
                .map(|a| a.trim_end_matches("[]").to_string())
                .or_else(|| infer.from_name(name))
                .unwrap_or_else(|| "[type]".to_string());
            Some(format!("...{}", element))
        } else if let Some(annotation) = annotation {
            Some(annotation.to_string())
        } else {
            default.and_then(|d| infer.from_value(d))
        };

        vec![Argument::new(name, arg_type)]
    }
}

fn group<'h>(caps: &Captures<'h>, name: &str) -> Option<&'h str> {
    caps.name(name).map(|m| m.as_str()).filter(|s| !s.is_empty())
}

/// Split text following `(` at the parenthesis that closes it.
fn split_params(text: &str) -> (&str, Option<&str>) {
    match find_top_level(text, |_, ch| ch == ')') {
        Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
        None => (text, None),
    }
}

fn return_annotation(after: &str) -> Option<String> {
    RETURN_ANNOTATION
        .captures(after)
        .map(|caps| caps["ret"].trim().to_string())
}

/// `name = default`, ignoring `=>`, `==` and comparison operators.
fn split_default(text: &str) -> (&str, Option<&str>) {
    let bytes = text.as_bytes();
    let found = find_top_level(text, |idx, ch| {
        ch == '='
            && !matches!(bytes.get(idx + 1), Some(b'>') | Some(b'='))
            && !matches!(
                idx.checked_sub(1).and_then(|prev| bytes.get(prev)),
                Some(b'=') | Some(b'!') | Some(b'<') | Some(b'>')
            )
    });
    match found {
        Some(idx) => (text[..idx].trim(), Some(text[idx + 1..].trim())),
        None => (text.trim(), None),
    }
}

/// `name: Type`
fn split_annotation(text: &str) -> (&str, Option<&str>) {
    match find_top_level(text, |_, ch| ch == ':') {
        Some(idx) => {
            let annotation = text[idx + 1..].trim();
            (text[..idx].trim(), (!annotation.is_empty()).then_some(annotation))
        }
        None => (text, None),
    }
}
