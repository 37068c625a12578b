//! Blank lines between sections of a block.

use std::sync::LazyLock;

use docblock_config::SectionSpacer;
use regex::Regex;

static TAG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*@([a-zA-Z]+)").expect("tag name pattern is valid"));

/// Insert blank lines according to `spacer`.
///
/// `BetweenSections` separates every run of a new tag name from what comes
/// before it. `AfterDescription` adds one blank line between a leading
/// description and the first tag.
pub fn apply(lines: Vec<String>, spacer: SectionSpacer) -> Vec<String> {
    match spacer {
        SectionSpacer::None => lines,
        SectionSpacer::BetweenSections => between_sections(lines),
        SectionSpacer::AfterDescription => after_description(lines),
    }
}

fn tag_name(line: &str) -> Option<&str> {
    TAG_NAME
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn between_sections(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len() + 4);
    let mut last_tag: Option<String> = None;

    for line in lines {
        match tag_name(&line) {
            Some(tag) => {
                if last_tag.as_deref() != Some(tag) {
                    if !out.is_empty() {
                        out.push(String::new());
                    }
                    last_tag = Some(tag.to_string());
                }
            }
            None => last_tag = None,
        }
        out.push(line);
    }
    out
}

fn after_description(mut lines: Vec<String>) -> Vec<String> {
    let has_description = lines.first().is_some_and(|first| tag_name(first).is_none());
    if has_description {
        if let Some(idx) = lines.iter().position(|line| tag_name(line).is_some()) {
            lines.insert(idx, String::new());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn between_sections_separates_tag_runs() {
        let out = apply(
            strings(&["desc", "@param a", "@param b", "@return x"]),
            SectionSpacer::BetweenSections,
        );
        assert_eq!(out, strings(&["desc", "", "@param a", "@param b", "", "@return x"]));
    }

    #[test]
    fn no_leading_blank_without_description() {
        let out = apply(strings(&["@param a", "@return x"]), SectionSpacer::BetweenSections);
        assert_eq!(out, strings(&["@param a", "", "@return x"]));
    }

    #[test]
    fn after_description_inserts_once() {
        let out = apply(
            strings(&["desc", "@param a", "@return x"]),
            SectionSpacer::AfterDescription,
        );
        assert_eq!(out, strings(&["desc", "", "@param a", "@return x"]));

        let out = apply(strings(&["@private"]), SectionSpacer::AfterDescription);
        assert_eq!(out, strings(&["@private"]));
    }
}
