//! Type guesses from initializer expressions and identifier names.

use std::sync::LazyLock;

use docblock_config::Settings;
use regex::Regex;

use crate::notation;
use crate::parser::DeclarationParser;

/// `isReady`, `has_items`, `_isOpen`.
pub(crate) static PREDICATE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[$_]?(?:is|has)(?:$|[A-Z_])").expect("predicate name pattern is valid")
});

static CALLBACK_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:cb|callback|done|next|fn)$").expect("callback name pattern is valid")
});

static REGEXP_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:RegExp\b|/[^/])").expect("regexp value pattern is valid"));

static CONSTRUCTED_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^new\s+([a-zA-Z_$][a-zA-Z_$0-9.]*)").expect("constructor call pattern is valid")
});

/// Spelling of primitive type names, from `lowerCasePrimitives` and
/// `shortPrimitives`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimitiveStyle {
    pub lower_case: bool,
    pub short: bool,
}

impl From<&Settings> for PrimitiveStyle {
    fn from(settings: &Settings) -> Self {
        Self {
            lower_case: settings.lower_case_primitives,
            short: settings.short_primitives,
        }
    }
}

impl PrimitiveStyle {
    fn spell(&self, name: &str) -> String {
        if self.lower_case {
            name.to_lowercase()
        } else {
            name.to_string()
        }
    }

    pub fn number(&self) -> String {
        self.spell("Number")
    }

    pub fn string(&self) -> String {
        self.spell("String")
    }

    /// `Boolean`, or `Bool` when short names are allowed.
    pub fn boolean(&self, allow_short: bool) -> String {
        self.spell(if self.short && allow_short { "Bool" } else { "Boolean" })
    }
}

/// Language switches for [`guess_from_value`].
#[derive(Debug, Clone, Copy)]
pub struct ValueRules {
    /// Treat any expression containing `=>` as a function.
    pub arrow_is_function: bool,
    /// Honour `shortPrimitives` for booleans.
    pub short_booleans: bool,
}

/// Guess the type of an initializer expression.
///
/// ```
/// use docblock_core::infer::{guess_from_value, PrimitiveStyle, ValueRules};
///
/// let rules = ValueRules { arrow_is_function: true, short_booleans: true };
/// let style = PrimitiveStyle::default();
///
/// assert_eq!(guess_from_value("0x1f", style, rules).as_deref(), Some("Number"));
/// assert_eq!(guess_from_value("new Date()", style, rules).as_deref(), Some("Date"));
/// assert_eq!(guess_from_value("x => x", style, rules).as_deref(), Some("Function"));
/// assert_eq!(guess_from_value("compute()", style, rules), None);
/// ```
pub fn guess_from_value(value: &str, style: PrimitiveStyle, rules: ValueRules) -> Option<String> {
    let value = value.trim();
    let first = value.chars().next()?;

    if is_numeric(value) {
        return Some(style.number());
    }
    if matches!(first, '"' | '\'' | '`') {
        return Some(style.string());
    }
    if first == '[' {
        return Some("Array".to_string());
    }
    if first == '{' {
        return Some("Object".to_string());
    }
    if value == "true" || value == "false" {
        return Some(style.boolean(rules.short_booleans));
    }
    if REGEXP_VALUE.is_match(value) {
        return Some("RegExp".to_string());
    }
    if rules.arrow_is_function && value.contains("=>") {
        return Some("Function".to_string());
    }
    if value.starts_with("new ") {
        return CONSTRUCTED_VALUE
            .captures(value)
            .map(|caps| caps[1].to_string());
    }
    None
}

/// Decimal, exponent, hex, binary and octal literals, with `_` separators.
fn is_numeric(value: &str) -> bool {
    let value = value.strip_prefix('-').unwrap_or(value).replace('_', "");
    let radix = |digits: &str, radix: u32| {
        !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
    };

    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        return radix(hex, 16);
    }
    if let Some(bin) = value.strip_prefix("0b").or_else(|| value.strip_prefix("0B")) {
        return radix(bin, 2);
    }
    if let Some(oct) = value.strip_prefix("0o").or_else(|| value.strip_prefix("0O")) {
        return radix(oct, 8);
    }

    value.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && value.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Type guesses bound to one parser and one settings snapshot.
pub struct TypeInferencer<'a> {
    parser: &'a dyn DeclarationParser,
    settings: &'a Settings,
}

impl<'a> TypeInferencer<'a> {
    pub fn new(parser: &'a dyn DeclarationParser, settings: &'a Settings) -> Self {
        Self { parser, settings }
    }

    /// Keyword of the variable tag: `overrideJsVar` when set, else the
    /// parser's own (`type`).
    pub fn type_tag(&self) -> &'a str {
        self.settings
            .override_js_var
            .as_deref()
            .unwrap_or(self.parser.settings().type_tag)
    }

    /// Type of an initializer, delegated to the language parser.
    pub fn from_value(&self, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        self.parser
            .guess_type_from_value(value, PrimitiveStyle::from(self.settings))
    }

    /// Type implied by a name: the first matching notation rule that names a
    /// type, then predicate names, then conventional callback names.
    pub fn from_name(&self, name: &str) -> Option<String> {
        let implied = notation::matching(&self.settings.notation_map, name)
            .into_iter()
            .find_map(|rule| rule.implied_type.as_deref());
        if let Some(implied) = implied {
            let resolved = match implied {
                "typeTag" => self.type_tag(),
                key => self.parser.settings().lookup(key).unwrap_or(key),
            };
            return Some(resolved.to_string());
        }

        if PREDICATE_NAME.is_match(name) {
            return Some(self.bool_type());
        }
        if CALLBACK_NAME.is_match(name) {
            return Some(self.parser.settings().function_type.to_string());
        }
        None
    }

    pub fn bool_type(&self) -> String {
        PrimitiveStyle {
            short: false,
            ..PrimitiveStyle::from(self.settings)
        }
        .spell(self.parser.settings().bool_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JS: ValueRules = ValueRules {
        arrow_is_function: true,
        short_booleans: true,
    };

    fn guess(value: &str) -> Option<String> {
        guess_from_value(value, PrimitiveStyle::default(), JS)
    }

    #[test]
    fn literals() {
        assert_eq!(guess("42").as_deref(), Some("Number"));
        assert_eq!(guess("-1.5e3").as_deref(), Some("Number"));
        assert_eq!(guess("1_000").as_deref(), Some("Number"));
        assert_eq!(guess("'a'").as_deref(), Some("String"));
        assert_eq!(guess("`tpl`").as_deref(), Some("String"));
        assert_eq!(guess("[1, 2]").as_deref(), Some("Array"));
        assert_eq!(guess("{}").as_deref(), Some("Object"));
        assert_eq!(guess("true").as_deref(), Some("Boolean"));
        assert_eq!(guess("/ab+c/").as_deref(), Some("RegExp"));
        assert_eq!(guess("RegExp('x')").as_deref(), Some("RegExp"));
    }

    #[test]
    fn identifiers_are_not_numbers() {
        assert_eq!(guess("infinity"), None);
        assert_eq!(guess("NaN"), None);
        assert_eq!(guess("0xZZ"), None);
    }

    #[test]
    fn empty_value_has_no_type() {
        assert_eq!(guess("   "), None);
    }

    #[test]
    fn primitive_spelling_options() {
        let style = PrimitiveStyle {
            lower_case: true,
            short: true,
        };
        assert_eq!(guess_from_value("1", style, JS).as_deref(), Some("number"));
        assert_eq!(guess_from_value("false", style, JS).as_deref(), Some("bool"));

        let no_short = ValueRules {
            arrow_is_function: false,
            short_booleans: false,
        };
        assert_eq!(
            guess_from_value("false", style, no_short).as_deref(),
            Some("boolean")
        );
        assert_eq!(guess_from_value("() => 1", style, no_short), None);
    }

    #[test]
    fn constructor_call_names_the_type() {
        assert_eq!(guess("new Map()").as_deref(), Some("Map"));
        assert_eq!(guess("new   ns.Widget(1)").as_deref(), Some("ns.Widget"));
    }

    #[test]
    fn notation_type_can_name_a_settings_key() {
        use crate::parser::JavascriptParser;
        use docblock_config::NotationRule;

        let parser = JavascriptParser::new();
        let mut settings = Settings::default();
        settings.notation_map = vec![
            NotationRule::prefix("flag").with_type("bool"),
            NotationRule::prefix("kind").with_type("typeTag"),
        ];

        let infer = TypeInferencer::new(&parser, &settings);
        assert_eq!(infer.from_name("flagDirty").as_deref(), Some("Boolean"));
        assert_eq!(infer.from_name("kindName").as_deref(), Some("type"));

        settings.override_js_var = Some("var".to_string());
        let infer = TypeInferencer::new(&parser, &settings);
        assert_eq!(infer.from_name("kindName").as_deref(), Some("var"));
        assert_eq!(infer.type_tag(), "var");
    }
}
