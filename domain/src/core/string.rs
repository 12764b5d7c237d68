//! String utilities for the domain layer.
//!
//! Lengths here are counted in chars (Unicode scalar values), not bytes.

/// Number of chars in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Keep at most `max_chars` chars of `s`, never splitting a code point.
///
/// Returns a borrowed slice so callers can decide whether to allocate.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Short preview of `s`: the first `max_chars` chars followed by `...`
pub fn preview(s: &str, max_chars: usize) -> String {
    format!("{}...", truncate_chars(s, max_chars))
}

/// Collapse every run of whitespace into a single space and trim the ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello");
        assert_eq!(truncate_chars("hello", 0), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("日本語テスト", 3), "日本語");
        assert_eq!(truncate_chars("👋🌍🎉", 2), "👋🌍");
        assert_eq!(char_len("👋🌍🎉"), 3);
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("ab", 3), "ab...");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  hello \n\t  world  "), "hello world");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
