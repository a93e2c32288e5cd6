//! Logging with colored module prefixes.
//!
//! Provides the `log!` macro for formatted output of the form
//! `[module] message`, with the prefix colored by module kind.
//!
//! # Example
//!
//! ```ignore
//! log!("index"; "{} documents from {}", count, folder.display());
//! ```

use colored::{ColoredString, Colorize};
use std::io::{Write, stdout};

/// Maximum width of a single log line; longer messages are truncated.
const MAX_LINE_WIDTH: usize = 120;

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
///
/// Single-line messages are truncated to the line width; multiline
/// messages are printed as-is.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();

    if message.contains('\n') {
        writeln!(stdout, "{prefix} {message}").ok();
    } else {
        // "[module] " overhead: brackets plus the separating space
        let max_msg_len = MAX_LINE_WIDTH.saturating_sub(module.len() + 3);
        writeln!(stdout, "{prefix} {}", truncate_str(message, max_msg_len)).ok();
    }

    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "resolve" => prefix.bright_blue().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character
/// boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_short_string() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_str_exact_length() {
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_str_needs_truncation() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "€" is 3 bytes; truncating at byte 4 must back up to byte 3
        assert_eq!(truncate_str("€€", 4), "€");
        assert_eq!(truncate_str("€€", 3), "€");
        assert_eq!(truncate_str("€€", 6), "€€");
    }

    #[test]
    fn test_truncate_str_empty_and_zero() {
        assert_eq!(truncate_str("", 10), "");
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_log_does_not_panic() {
        log("index", "12 documents from content/posts");
        log("error", "multi\nline\nmessage");
        log("other", &"x".repeat(500));
    }
}
