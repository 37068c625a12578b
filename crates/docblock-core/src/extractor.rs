//! Recovers the declaration text that follows the cursor.

use std::sync::LazyLock;

use regex::Regex;

/// Upper bound on lines consumed while looking for the end of a declaration.
pub const MAX_LOOKAHEAD_LINES: usize = 25;

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//.*").expect("line comment pattern is valid"));

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*.*\*/").expect("block comment pattern is valid"));

/// Concatenate lookahead lines into one declaration string.
///
/// Comments are removed line by line and lines are joined without a
/// separator until the parentheses opened since the function opener are
/// balanced again. On the first line only the text from `opener` onwards is
/// counted, so a stray `)` before the declaration does not end it early.
/// At most [`MAX_LOOKAHEAD_LINES`] lines are read.
///
/// ```
/// use docblock_core::extractor::definition;
///
/// let lines = ["function add(a, // first", "    b) {", "  return a + b;", "}"];
/// assert_eq!(definition(&lines, None), "function add(a,     b) {");
/// ```
pub fn definition<S: AsRef<str>>(lines: &[S], opener: Option<&Regex>) -> String {
    let mut definition = String::new();
    let mut depth: isize = 0;

    for (idx, line) in lines.iter().take(MAX_LOOKAHEAD_LINES).enumerate() {
        let line = LINE_COMMENT.replace_all(line.as_ref(), "");
        let line = BLOCK_COMMENT.replace_all(&line, "");

        let mut counted: &str = &line;
        if idx == 0 {
            if let Some(m) = opener.and_then(|re| re.find(&line)) {
                counted = &line[m.start()..];
            }
        }

        for ch in counted.chars() {
            match ch {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
        }

        definition.push_str(&line);
        if depth <= 0 {
            break;
        }
    }

    definition
}
