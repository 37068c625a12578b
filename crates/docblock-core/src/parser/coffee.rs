//! CoffeeScript declarations (`###*` blocks).

use std::sync::LazyLock;

use regex::Regex;

use super::{value_expression, DeclarationParser, ParserSettings};
use crate::infer::{self, PrimitiveStyle, ValueRules};
use crate::model::{ParsedFunction, ParsedVariable};

const IDENTIFIER: &str = r"[a-zA-Z_$][a-zA-Z_$0-9]*";

const VALUE_RULES: ValueRules = ValueRules {
    arrow_is_function: false,
    short_booleans: false,
};

/// `name = (a, b) ->`, `name: =>`, `(x) ->`
static FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:(?P<name>{id})\s*[:=]\s*)?(?:\((?P<args>[^()]*?)\))?\s*[=-]>",
        id = IDENTIFIER
    ))
    .expect("coffee function pattern is valid")
});

static VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?P<name>{id})\s*[=:]\s*(?P<val>.*)$", id = IDENTIFIER))
        .expect("coffee variable pattern is valid")
});

/// Parser for `.coffee` sources.
///
/// Declarations never span lines, so there is no function opener.
#[derive(Debug, Clone)]
pub struct CoffeeParser {
    settings: ParserSettings,
}

impl Default for CoffeeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CoffeeParser {
    pub const LANGUAGES: &'static [&'static str] = &["coffeescript", "coffee"];

    pub fn new() -> Self {
        Self {
            settings: ParserSettings {
                type_info: true,
                curly_types: true,
                type_tag: "type",
                comment_prefix: "*",
                comment_closer: "###",
                fn_opener: None,
                bool_type: "Boolean",
                function_type: "Function",
            },
        }
    }
}

impl DeclarationParser for CoffeeParser {
    fn name(&self) -> &'static str {
        "coffee"
    }

    fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    fn parse_function(&self, declaration: &str) -> Option<ParsedFunction> {
        let caps = FUNCTION.captures(declaration)?;
        let name = caps.name("name").map_or("", |m| m.as_str());
        let args = caps.name("args").map_or("", |m| m.as_str());
        Some(ParsedFunction::new(name, args.trim()))
    }

    fn parse_var(&self, declaration: &str) -> Option<ParsedVariable> {
        let caps = VAR.captures(declaration)?;
        Some(ParsedVariable::new(
            &caps["name"],
            value_expression(&caps["val"]),
        ))
    }

    fn guess_type_from_value(&self, value: &str, style: PrimitiveStyle) -> Option<String> {
        infer::guess_from_value(value, style, VALUE_RULES)
    }
}
