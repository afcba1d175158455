//! Canonical text used for vectorization.

use super::patterns::{UNSAFE_CHARS, WHITESPACE_RUN};

/// Collapse whitespace runs to single spaces, replace characters outside
/// word characters, whitespace and `. , ! ? -` with a space, and trim.
///
/// The replacement runs after the collapse, so removed characters can
/// leave double spaces behind.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, " ");
    let safe = UNSAFE_CHARS.replace_all(&collapsed, " ");
    safe.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("  Jane\t\tDoe\n\nEngineer  "), "Jane Doe Engineer");
    }

    #[test]
    fn test_strips_unsafe_characters() {
        assert_eq!(clean_text("C++ & Rust!"), "C     Rust!");
        assert_eq!(clean_text("jane@example.com"), "jane example.com");
    }

    #[test]
    fn test_keeps_safe_punctuation() {
        assert_eq!(clean_text("Hello, world. Ready? Yes - go!"), "Hello, world. Ready? Yes - go!");
    }
}
