//! Comma splitting that respects quoted and bracketed regions.

const OPENERS: [char; 5] = ['"', '\'', '<', '(', '{'];
const CLOSERS: [char; 5] = ['"', '\'', '>', ')', '}'];

/// Split `text` on commas that are outside any quoted or bracketed region.
///
/// A region starts at one of `" ' < ( {` and ends at the first matching
/// `" ' > ) }`. Only one region is tracked at a time, so `f(g(a, b), c)`
/// closes its region at the first `)`. A backslash makes the next character
/// literal. Tokens are trimmed; empty input yields one empty token and
/// callers drop empty tokens.
///
/// ```
/// use docblock_core::splitter::split_by_commas;
///
/// assert_eq!(
///     split_by_commas(r#"foo, bar(baz, quux), fwip = "hey, hi""#),
///     vec!["foo", "bar(baz, quux)", r#"fwip = "hey, hi""#]
/// );
/// ```
pub fn split_by_commas(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut closer: Option<char> = None;
    let mut escaped = false;

    for ch in text.chars() {
        if escaped {
            escaped = false;
            current.push(ch);
            continue;
        }
        if ch == '\\' {
            escaped = true;
            current.push(ch);
            continue;
        }

        match closer {
            Some(expected) => {
                if ch == expected {
                    closer = None;
                }
                current.push(ch);
            }
            None if ch == ',' => {
                tokens.push(current.trim().to_string());
                current.clear();
            }
            None => {
                if let Some(idx) = OPENERS.iter().position(|&open| open == ch) {
                    closer = Some(CLOSERS[idx]);
                }
                current.push(ch);
            }
        }
    }

    tokens.push(current.trim().to_string());
    tokens
}
