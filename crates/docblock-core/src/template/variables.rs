//! `{{date}}` and `{{datetime}}` substitution.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::{Captures, Regex};

static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("template variable pattern is valid"));

/// Value of a template variable, or `None` for unknown names.
pub fn value(name: &str, now: &DateTime<FixedOffset>) -> Option<String> {
    match name {
        "date" => Some(now.format("%Y-%m-%d").to_string()),
        "datetime" => Some(now.format("%Y-%m-%dT%H:%M:%S%z").to_string()),
        _ => None,
    }
}

/// Replace known variables in every line; unknown markers are left as-is.
pub fn substitute(lines: &mut [String], now: &DateTime<FixedOffset>) {
    for line in lines.iter_mut().filter(|line| line.contains("{{")) {
        let replaced = VARIABLE.replace_all(line, |caps: &Captures<'_>| {
            value(&caps[1], now).unwrap_or_else(|| caps[0].to_string())
        });
        *line = replaced.into_owned();
    }
}
