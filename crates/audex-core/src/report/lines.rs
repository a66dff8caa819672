//! Character-level helpers shared by the classifiers.
//!
//! Every function here is total: defined for all inputs including the
//! empty string, so no classifier ever indexes past a line's end.
//! Offsets are in characters, not bytes.

use super::patterns::WHITESPACE;

/// Remove all whitespace from a line.
pub(crate) fn strip_whitespace(line: &str) -> String {
    WHITESPACE.replace_all(line, "").into_owned()
}

/// True if the line's first character is an ASCII digit.
pub(crate) fn starts_with_digit(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Byte index of the first ASCII digit, if any.
pub(crate) fn first_digit_index(line: &str) -> Option<usize> {
    line.char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i)
}

/// The substring after the first `n` characters, or `""` when the line
/// is shorter.
pub(crate) fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

/// The first `n` characters, or the whole string when it is shorter.
pub(crate) fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// The characters in `[start, end)`, clamped to the string's length.
pub(crate) fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    take_chars(skip_chars(s, start), end.saturating_sub(start))
}
