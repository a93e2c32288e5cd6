//! Frontmatter block splitting.
//!
//! A document may open with a `---` delimited metadata block:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-06-15
//! ---
//! body text...
//! ```
//!
//! Splitting is purely lexical; parsing the block as YAML happens in
//! `document`. Both halves borrow from the input.

/// Delimiter line opening and closing a metadata block.
const DELIMITER: &str = "---";

/// Split a document's text into its metadata block and body.
///
/// Returns `(None, text)` when the text does not open with a delimiter
/// line. An opening delimiter without a closing one claims the whole
/// remainder as metadata and leaves the body empty; a missing body is
/// never an error.
pub fn split(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = strip_open(text) else {
        return (None, text);
    };

    match find_close(rest) {
        Some((block, body)) => (Some(block), body),
        None => (Some(rest), ""),
    }
}

/// Strip the opening delimiter line, if present at the very start.
fn strip_open(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(DELIMITER)?;
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Find the closing delimiter line and split around it.
fn find_close(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == DELIMITER {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((block, body));
        }
        offset += line.len();
    }
    None
}
