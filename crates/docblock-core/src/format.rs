//! Turns a parse result into ordered tag lines.
//!
//! Lines still carry snippet placeholders, all numbered `1`; the template
//! assembler renumbers them once the final order is known.

use docblock_config::{AlignTags, Settings};

use crate::infer::TypeInferencer;
use crate::model::{Parsed, ParsedFunction, ParsedVariable};
use crate::notation;
use crate::parser::{DeclarationParser, ReturnType};
use crate::snippet::{escape, placeholder};

const UNKNOWN_TYPE: &str = "[type]";
const DESCRIPTION: &str = "[description]";

/// Builds tag lines for one invocation.
pub struct TagFormatter<'a> {
    parser: &'a dyn DeclarationParser,
    settings: &'a Settings,
    infer: TypeInferencer<'a>,
    description: Option<&'a str>,
    inline: bool,
}

impl<'a> TagFormatter<'a> {
    pub fn new(parser: &'a dyn DeclarationParser, settings: &'a Settings) -> Self {
        Self {
            parser,
            settings,
            infer: TypeInferencer::new(parser, settings),
            description: None,
            inline: false,
        }
    }

    /// Text already typed after the trigger, used instead of the generated
    /// description placeholder. Must be snippet-escaped.
    pub fn description(mut self, description: Option<&'a str>) -> Self {
        self.description = description.filter(|d| !d.is_empty());
        self
    }

    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    pub fn format(&self, parsed: &Parsed) -> Vec<String> {
        match parsed {
            Parsed::Function(function) => self.format_function(function),
            Parsed::Variable(variable) => self.format_var(variable),
            Parsed::NoMatch => Vec::new(),
        }
    }

    pub fn format_function(&self, function: &ParsedFunction) -> Vec<String> {
        if function.is_setter_like {
            return vec!["@private".to_string()];
        }

        let settings = self.settings;
        let name = function.name.as_str();
        let mut out = Vec::new();

        if settings.function_description {
            out.push(placeholder(1, &self.description_for(name)));
        }
        if settings.autoadd_method_tag {
            out.push(format!("@method {}", escape(name)));
        }
        if !settings.extra_tags_go_after {
            out.extend(settings.extra_tags.iter().cloned());
        }

        for arg in self.parser.parse_args(&function.raw_args, &self.infer) {
            let arg_type = arg
                .arg_type
                .clone()
                .or_else(|| self.infer.from_name(&arg.name))
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

            let mut line = String::from("@param");
            if let Some(typed) = self.typed(&arg_type) {
                line.push(' ');
                line.push_str(&typed);
            }
            if settings.param_name {
                line.push(' ');
                line.push_str(&escape(&arg.name));
            }
            if settings.param_description {
                line.push(' ');
                line.push_str(&placeholder(1, DESCRIPTION));
            }
            out.push(line);
        }

        let has_args = !function.raw_args.trim().is_empty();
        if function.is_generator {
            let tag = if settings.return_tag().ends_with('s') {
                "@yields"
            } else {
                "@yield"
            };
            out.push(self.result_line(tag, UNKNOWN_TYPE, false));
        } else {
            match self.parser.return_type(function, &self.infer) {
                ReturnType::Suppressed => {}
                ReturnType::Known(ty) => {
                    out.push(self.result_line(settings.return_tag(), &ty, has_args))
                }
                ReturnType::Unknown => {
                    out.push(self.result_line(settings.return_tag(), UNKNOWN_TYPE, has_args))
                }
            }
        }

        for rule in notation::matching(&settings.notation_map, name) {
            out.extend(rule.tags.iter().cloned());
        }

        if settings.extra_tags_go_after {
            out.extend(settings.extra_tags.iter().cloned());
        }

        out
    }

    pub fn format_var(&self, variable: &ParsedVariable) -> Vec<String> {
        let var_type = variable
            .type_hint
            .clone()
            .or_else(|| self.infer.from_value(&variable.value_expr))
            .or_else(|| self.infer.from_name(&variable.name))
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

        let mut tag = format!("@{}", self.infer.type_tag());
        if let Some(typed) = self.typed(&var_type) {
            tag.push(' ');
            tag.push_str(&typed);
        }

        if self.inline {
            let description = self.description.unwrap_or(DESCRIPTION);
            vec![format!("{} {}", tag, placeholder(1, description))]
        } else {
            vec![
                placeholder(1, &self.description_for(&variable.name)),
                tag,
            ]
        }
    }

    fn description_for(&self, name: &str) -> String {
        match self.description {
            Some(description) => description.to_string(),
            None if name.is_empty() => DESCRIPTION.to_string(),
            None => format!("[{} description]", escape(name)),
        }
    }

    /// `{${1:Type}}`, or `None` when the language shows no types.
    fn typed(&self, ty: &str) -> Option<String> {
        let parser = self.parser.settings();
        if !parser.type_info {
            return None;
        }
        let field = placeholder(1, &escape(ty));
        Some(if parser.curly_types {
            format!("{{{}}}", field)
        } else {
            field
        })
    }

    /// A `@return`/`@yield` line. The doubled space before the description
    /// leaves an empty column so deep alignment lines it up with parameter
    /// descriptions.
    fn result_line(&self, tag: &str, ty: &str, pad_for_params: bool) -> String {
        let settings = self.settings;
        let mut line = tag.to_string();
        if let Some(typed) = self.typed(ty) {
            line.push(' ');
            line.push_str(&typed);
        }
        if settings.return_description {
            line.push(' ');
            if pad_for_params
                && settings.param_name
                && settings.align_tags == AlignTags::Deep
                && !settings.per_section_indent
            {
                line.push(' ');
            }
            line.push_str(&placeholder(1, DESCRIPTION));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{CoffeeParser, JavascriptParser};
    use docblock_config::NotationRule;

    fn lines(settings: &Settings, function: ParsedFunction) -> Vec<String> {
        let parser = JavascriptParser::new();
        TagFormatter::new(&parser, settings).format_function(&function)
    }

    #[test]
    fn default_function_block() {
        let out = lines(&Settings::default(), ParsedFunction::new("add", "a, b"));
        assert_eq!(
            out,
            vec![
                "${1:[add description]}",
                "@param {${1:[type]}} a ${1:[description]}",
                "@param {${1:[type]}} b ${1:[description]}",
                "@return {${1:[type]}}  ${1:[description]}",
            ]
        );
    }

    #[test]
    fn setter_is_private_only() {
        let out = lines(
            &Settings::default(),
            ParsedFunction::new("value", "v").setter_like(true),
        );
        assert_eq!(out, vec!["@private"]);
    }

    #[test]
    fn generator_gets_yield_matching_return_spelling() {
        let mut settings = Settings::default();
        settings.return_tag = "@returns".to_string();
        let out = lines(&settings, ParsedFunction::new("items", "").generator(true));
        assert_eq!(out.last().unwrap(), "@yields {${1:[type]}} ${1:[description]}");
        assert!(!out.iter().any(|l| l.starts_with("@returns")));
    }

    #[test]
    fn toggles_and_extra_tags() {
        let mut settings = Settings::default();
        settings.function_description = false;
        settings.autoadd_method_tag = true;
        settings.param_description = false;
        settings.return_description = false;
        settings.extra_tags = vec!["@public".to_string()];
        settings.extra_tags_go_after = true;

        let out = lines(&settings, ParsedFunction::new("run", "job"));
        assert_eq!(
            out,
            vec![
                "@method run",
                "@param {${1:[type]}} job",
                "@return {${1:[type]}}",
                "@public",
            ]
        );
    }

    #[test]
    fn notation_rules_add_tags_and_types() {
        let mut settings = Settings::default();
        settings.notation_map = vec![
            NotationRule::prefix("$").with_type("jQuery"),
            NotationRule::pattern("^_").with_tags(["@private"]),
        ];
        let out = lines(&settings, ParsedFunction::new("_wrap", "$el"));
        assert!(out.contains(&r"@param {${1:jQuery}} \$el ${1:[description]}".to_string()));
        assert_eq!(out.last().unwrap(), "@private");
    }

    #[test]
    fn constructor_has_no_return() {
        let out = lines(&Settings::default(), ParsedFunction::new("Widget", "opts"));
        assert!(!out.iter().any(|l| l.starts_with("@return")));
    }

    #[test]
    fn description_override() {
        let parser = JavascriptParser::new();
        let settings = Settings::default();
        let out = TagFormatter::new(&parser, &settings)
            .description(Some("Adds numbers"))
            .format_function(&ParsedFunction::new("add", ""));
        assert_eq!(out[0], "${1:Adds numbers}");
        assert_eq!(out[1], "@return {${1:[type]}} ${1:[description]}");
    }

    #[test]
    fn variable_block_and_inline() {
        let parser = JavascriptParser::new();
        let settings = Settings::default();
        let variable = ParsedVariable::new("count", "0");

        let out = TagFormatter::new(&parser, &settings).format_var(&variable);
        assert_eq!(out, vec!["${1:[count description]}", "@type {${1:Number}}"]);

        let out = TagFormatter::new(&parser, &settings)
            .inline(true)
            .format_var(&variable);
        assert_eq!(out, vec!["@type {${1:Number}} ${1:[description]}"]);
    }

    #[test]
    fn override_js_var_and_name_inference() {
        let parser = CoffeeParser::new();
        let mut settings = Settings::default();
        settings.override_js_var = Some("var".to_string());
        let out = TagFormatter::new(&parser, &settings)
            .format_var(&ParsedVariable::new("isOpen", "compute()"));
        assert_eq!(out[1], "@var {${1:Boolean}}");
    }
}
