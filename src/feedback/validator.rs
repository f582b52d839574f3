//! Free-text feedback validation.
//!
//! This is a blocklist, not a sanitizer: it catches the obvious script
//! injection shapes and escapes everything else. Stored text is never rendered
//! back into pages.

/// Default maximum length, in characters, after trimming.
pub const MAX_FEEDBACK_CHARS: usize = 5000;

/// Lower-case substrings that reject a submission outright.
pub const DENYLIST: [&str; 8] = [
    "<script",
    "javascript:",
    "onload=",
    "onerror=",
    "eval(",
    "document.",
    "window.",
    "alert(",
];

/// Validate with the default length limit.
pub fn validate_feedback(text: &str) -> Option<String> {
    validate_feedback_with_limit(text, MAX_FEEDBACK_CHARS)
}

/// Trim, length-check, denylist-check, then HTML-escape.
///
/// Returns `None` when the text is empty, longer than `max_chars`, or contains
/// a denylisted pattern in any letter case.
pub fn validate_feedback_with_limit(text: &str, max_chars: usize) -> Option<String> {
    let text = text.trim();

    if text.is_empty() || text.chars().count() > max_chars {
        return None;
    }

    let lower = text.to_lowercase();
    if DENYLIST.iter().any(|pattern| lower.contains(pattern)) {
        return None;
    }

    Some(tera::escape_html(text))
}
