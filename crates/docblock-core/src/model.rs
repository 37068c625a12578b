//! Parse results handed from language parsers to the tag formatter.

use serde::Serialize;

/// A recovered function-like declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFunction {
    /// Declared name without any generator marker; empty for anonymous functions.
    pub name: String,
    /// Text between the parameter list's parentheses.
    pub raw_args: String,
    /// Return type written in the source, if the language has such syntax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_hint: Option<String>,
    pub is_generator: bool,
    /// Setters only get a `@private` tag.
    pub is_setter_like: bool,
}

impl ParsedFunction {
    pub fn new(name: impl Into<String>, raw_args: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_args: raw_args.into(),
            ..Default::default()
        }
    }

    pub fn generator(mut self, is_generator: bool) -> Self {
        self.is_generator = is_generator;
        self
    }

    pub fn setter_like(mut self, is_setter_like: bool) -> Self {
        self.is_setter_like = is_setter_like;
        self
    }

    pub fn with_return_hint(mut self, hint: Option<String>) -> Self {
        self.return_hint = hint;
        self
    }
}

/// A recovered variable or property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedVariable {
    pub name: String,
    /// Initializer text, trimmed. Empty when there is none.
    pub value_expr: String,
    /// Declared type annotation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,
}

impl ParsedVariable {
    pub fn new(name: impl Into<String>, value_expr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_expr: value_expr.into(),
            type_hint: None,
        }
    }

    pub fn with_type_hint(mut self, hint: Option<String>) -> Self {
        self.type_hint = hint;
        self
    }
}

/// Outcome of parsing a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Parsed {
    Function(ParsedFunction),
    Variable(ParsedVariable),
    NoMatch,
}

/// One documented parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    /// Type known from the source (annotation, default value, rest marker).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub arg_type: Option<String>,
    pub name: String,
}

impl Argument {
    pub fn new(name: impl Into<String>, arg_type: Option<String>) -> Self {
        Self {
            arg_type,
            name: name.into(),
        }
    }
}
