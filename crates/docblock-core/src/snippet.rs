//! Helpers for the editor snippet syntax.
//!
//! Generated lines carry tab stops of the form `${N:default}` and a final
//! cursor stop `$0`. Literal `$`, `{` and `}` coming from user source must be
//! escaped with a backslash so the host does not read them as snippet syntax.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static TAB_STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{\d+:((?:\\.|[^}\\])+)\}").expect("tab stop pattern is valid")
});

static NUMBERED_STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\$\{)\d+(:(?:\\.|[^}\\])+\})").expect("numbered stop pattern is valid")
});

static ANY_STOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{\d+:((?:\\.|[^}\\])*)\}|\$\d+").expect("snippet stop pattern is valid")
});

static ESCAPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([${}])").expect("escape pattern is valid"));

/// Backslash-escape every `$`, `{` and `}`.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '$' | '{' | '}') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// `${index:default}`. Indices are made sequential later by [`renumber`].
pub fn placeholder(index: usize, default: &str) -> String {
    format!("${{{}:{}}}", index, default)
}

/// Number of characters `text` occupies once the host has expanded it.
///
/// ```
/// use docblock_core::snippet::rendered_width;
///
/// assert_eq!(rendered_width("{${1:Number}}"), "{Number}".len());
/// assert_eq!(rendered_width(r"\$el"), 3);
/// ```
pub fn rendered_width(text: &str) -> usize {
    let expanded = TAB_STOP.replace_all(text, "$1");
    ESCAPED.replace_all(&expanded, "$1").chars().count()
}

/// Give every tab stop a sequential index starting at 1, in reading order.
pub fn renumber(lines: &mut [String]) {
    let mut counter = 0usize;
    for line in lines.iter_mut() {
        if !line.contains("${") {
            continue;
        }
        let replaced = NUMBERED_STOP.replace_all(line, |caps: &Captures<'_>| {
            counter += 1;
            format!("{}{}{}", &caps[1], counter, &caps[2])
        });
        *line = replaced.into_owned();
    }
}

/// Expand snippet syntax into the text a user would see with every default
/// accepted. Used by front-ends that cannot drive tab stops.
pub fn strip(text: &str) -> String {
    let expanded = ANY_STOP.replace_all(text, |caps: &Captures<'_>| {
        caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default()
    });
    ESCAPED.replace_all(&expanded, "$1").into_owned()
}
