//! Column alignment of tag lines.

use docblock_config::{AlignTags, Settings};

use crate::snippet::rendered_width;

/// Pad the space-separated columns of every `@` line so that they line up.
///
/// `@author` lines are never split or rewritten. With `per_section_indent`
/// the return and yield lines do not contribute to column widths.
pub fn align(lines: &mut [String], settings: &Settings) {
    if settings.align_tags == AlignTags::None {
        return;
    }

    let return_tag = settings.return_tag();
    let excluded = |line: &str| {
        settings.per_section_indent && (line.starts_with(return_tag) || line.starts_with("@yield"))
    };

    let mut max_widths: Vec<usize> = Vec::new();
    for line in lines.iter().filter(|l| l.starts_with('@')) {
        if excluded(line) {
            continue;
        }
        let widths: Vec<usize> = if line.starts_with("@author") {
            vec!["@author".len()]
        } else {
            columns(line).into_iter().map(rendered_width).collect()
        };
        if widths.len() > max_widths.len() {
            max_widths.resize(widths.len(), 0);
        }
        for (max, width) in max_widths.iter_mut().zip(widths) {
            *max = (*max).max(width);
        }
    }

    if settings.align_tags == AlignTags::Shallow {
        max_widths.truncate(1);
    }

    let gap = " ".repeat(settings.min_spaces_between_columns);
    for line in lines.iter_mut() {
        if !line.starts_with('@') || line.starts_with("@author") {
            continue;
        }
        let mut rebuilt = String::with_capacity(line.len() + 16);
        for (idx, part) in columns(line).into_iter().enumerate() {
            let max = max_widths.get(idx).copied().unwrap_or(0);
            rebuilt.push_str(part);
            rebuilt.push_str(&gap);
            rebuilt.push_str(&" ".repeat(max.saturating_sub(rendered_width(part))));
        }
        *line = rebuilt.trim().to_string();
    }
}

/// Split on single spaces outside snippet placeholders. Empty columns are
/// kept, a `${N:...}` span is never split, and a backslash escapes the next
/// character.
fn columns(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut chars = line.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '$' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                chars.next();
                depth += 1;
            }
            '{' if depth > 0 => depth += 1,
            '}' if depth > 0 => depth -= 1,
            ' ' if depth == 0 => {
                out.push(&line[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    out.push(&line[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned(settings: &Settings, lines: &[&str]) -> Vec<String> {
        let mut lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        align(&mut lines, settings);
        lines
    }

    #[test]
    fn deep_pads_every_column() {
        let out = aligned(
            &Settings::default(),
            &["@param {number} x", "@param {string} longName", "@return {number}"],
        );
        assert_eq!(
            out,
            vec![
                "@param  {number} x",
                "@param  {string} longName",
                "@return {number}",
            ]
        );
    }

    #[test]
    fn widths_ignore_placeholder_markup() {
        let out = aligned(
            &Settings::default(),
            &["@param {${1:Boolean}} a", "@param {${1:[type]}} b"],
        );
        assert_eq!(out[0], "@param {${1:Boolean}} a");
        assert_eq!(out[1], "@param {${1:[type]}}  b");
    }

    #[test]
    fn shallow_pads_tag_column_only() {
        let mut settings = Settings::default();
        settings.align_tags = AlignTags::Shallow;
        settings.min_spaces_between_columns = 2;
        let out = aligned(&settings, &["@param {a} x", "@returns {bb} y"]);
        assert_eq!(out, vec!["@param    {a}  x", "@returns  {bb}  y"]);
    }

    #[test]
    fn author_and_description_lines_are_untouched() {
        let out = aligned(
            &Settings::default(),
            &["${1:[description]}", "@author Jane  Doe", "@param {a} x"],
        );
        assert_eq!(out[0], "${1:[description]}");
        assert_eq!(out[1], "@author Jane  Doe");
        assert_eq!(out[2], "@param  {a} x");
    }

    #[test]
    fn per_section_indent_skips_return_width() {
        let mut settings = Settings::default();
        settings.per_section_indent = true;
        let out = aligned(&settings, &["@param {a} x", "@return {longer}"]);
        assert_eq!(out[0], "@param {a} x");
        assert_eq!(out[1], "@return {longer}");
    }

    #[test]
    fn none_leaves_lines_alone() {
        let mut settings = Settings::default();
        settings.align_tags = AlignTags::None;
        let out = aligned(&settings, &["@param {a} x", "@return {b}"]);
        assert_eq!(out, vec!["@param {a} x", "@return {b}"]);
    }

    #[test]
    fn placeholders_are_single_columns() {
        assert_eq!(
            columns(r"@param {${1:Map<string, number>}} a  ${1:[x \} y]}"),
            vec!["@param", "{${1:Map<string, number>}}", "a", "", r"${1:[x \} y]}"]
        );
    }

    #[test]
    fn types_with_spaces_keep_their_text() {
        let out = aligned(
            &Settings::default(),
            &[
                "@param {${1:Map<string, number>}} a ${1:[description]}",
                r"@param {${1:\{ id: string \}}} bb ${1:[description]}",
            ],
        );
        assert_eq!(
            out,
            vec![
                "@param {${1:Map<string, number>}} a  ${1:[description]}",
                r"@param {${1:\{ id: string \}}}      bb ${1:[description]}",
            ]
        );
    }
}
