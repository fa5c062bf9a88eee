//! Unicode utilities for text processing.
//!
//! Counts are in Unicode scalar values (`char`s), matching how the
//! preview limit is defined.

/// Returns the first `max_chars` characters of `s`.
///
/// The second element is `true` when characters were cut off.
///
/// # Examples
///
/// ```
/// use interview_analyzer::io::char_prefix;
///
/// assert_eq!(char_prefix("Hello 世界", 7), ("Hello 世", true));
/// assert_eq!(char_prefix("Hello", 10), ("Hello", false));
/// ```
#[must_use]
pub fn char_prefix(s: &str, max_chars: usize) -> (&str, bool) {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => (&s[..end], true),
        None => (s, false),
    }
}
