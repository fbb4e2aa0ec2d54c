//! String utility functions
//!
//! Helpers the standard library leaves out: a single-char split that drops
//! empty tokens, first/last-occurrence replacement, first/last char checks,
//! UTF-8 byte length, and trailing-char trim.
//!
//! Null-accepting signatures from the managed-language world map to
//! `Option<&str>` in and `Option` out: `None` in always produces `None` out,
//! and the empty string produces the neutral result (empty vector, `false`,
//! zero, or the input itself).

use std::borrow::Cow;

/// Split a string on a single-character separator, dropping empty tokens
///
/// Non-preserving mode: consecutive separators, leading separators, and
/// trailing separators yield no empty tokens. Single pass; substrings are
/// sliced directly out of the input.
///
/// # Arguments
///
/// * `s` - The string to split, or `None`
/// * `separator` - The separator character
/// * `expect_parts` - Capacity hint for the output vector; no behavioral
///   effect
///
/// # Returns
///
/// `None` for `None` input, an empty vector for empty input, otherwise the
/// non-empty tokens in order
///
/// # Example
///
/// ```rust
/// use platform_utils::strings::split;
///
/// assert_eq!(split(Some("a,,b"), ',', 4), Some(vec!["a".to_string(), "b".to_string()]));
/// assert_eq!(split(Some(""), ',', 4), Some(vec![]));
/// assert_eq!(split(None, ',', 4), None);
/// ```
pub fn split(s: Option<&str>, separator: char, expect_parts: usize) -> Option<Vec<String>> {
    let s = s?;
    if s.is_empty() {
        return Some(Vec::new());
    }

    let mut parts = Vec::with_capacity(expect_parts);
    let mut start = 0;
    let mut matched = false;
    for (i, c) in s.char_indices() {
        if c == separator {
            if matched {
                parts.push(s[start..i].to_string());
                matched = false;
            }
            start = i + c.len_utf8();
        } else {
            matched = true;
        }
    }
    if matched {
        parts.push(s[start..].to_string());
    }
    Some(parts)
}

/// Replace only the first occurrence of a character
///
/// # Arguments
///
/// * `s` - The string to edit, or `None`
/// * `from` - The character to find
/// * `to` - The replacement character
///
/// # Returns
///
/// `None` for `None` input; `Cow::Borrowed` of the input when `from` is
/// absent; otherwise a new string with the first occurrence replaced
///
/// # Example
///
/// ```rust
/// use platform_utils::strings::replace_first;
///
/// assert_eq!(replace_first(Some("aXaX"), 'X', 'Y').as_deref(), Some("aYaX"));
/// assert_eq!(replace_first(Some("abc"), 'X', 'Y').as_deref(), Some("abc"));
/// assert_eq!(replace_first(None, 'X', 'Y'), None);
/// ```
pub fn replace_first(s: Option<&str>, from: char, to: char) -> Option<Cow<'_, str>> {
    let s = s?;
    Some(match s.find(from) {
        Some(index) => Cow::Owned(replace_at(s, index, from, to)),
        None => Cow::Borrowed(s),
    })
}

/// Replace only the last occurrence of a character
///
/// # Arguments
///
/// * `s` - The string to edit, or `None`
/// * `from` - The character to find
/// * `to` - The replacement character
///
/// # Returns
///
/// `None` for `None` input; `Cow::Borrowed` of the input when `from` is
/// absent; otherwise a new string with the last occurrence replaced
///
/// # Example
///
/// ```rust
/// use platform_utils::strings::replace_last;
///
/// assert_eq!(replace_last(Some("aXaX"), 'X', 'Y').as_deref(), Some("aXaY"));
/// assert_eq!(replace_last(Some("abc"), 'X', 'Y').as_deref(), Some("abc"));
/// assert_eq!(replace_last(None, 'X', 'Y'), None);
/// ```
pub fn replace_last(s: Option<&str>, from: char, to: char) -> Option<Cow<'_, str>> {
    let s = s?;
    Some(match s.rfind(from) {
        Some(index) => Cow::Owned(replace_at(s, index, from, to)),
        None => Cow::Borrowed(s),
    })
}

// Splice `to` in place of the `from` occurrence at byte offset `index`.
// Byte widths may differ, so a fresh buffer is built from the two halves.
fn replace_at(s: &str, index: usize, from: char, to: char) -> String {
    let mut out = String::with_capacity(s.len() - from.len_utf8() + to.len_utf8());
    out.push_str(&s[..index]);
    out.push(to);
    out.push_str(&s[index + from.len_utf8()..]);
    out
}

/// Check whether a string starts with the given character
///
/// # Arguments
///
/// * `s` - The string to check, or `None`
/// * `c` - The character to compare against
///
/// # Returns
///
/// `false` for `None` or empty input, otherwise whether the first character
/// equals `c`
///
/// # Example
///
/// ```rust
/// use platform_utils::strings::starts_with_char;
///
/// assert!(starts_with_char(Some("abc"), 'a'));
/// assert!(!starts_with_char(Some(""), 'a'));
/// assert!(!starts_with_char(None, 'a'));
/// ```
pub fn starts_with_char(s: Option<&str>, c: char) -> bool {
    s.is_some_and(|s| s.chars().next() == Some(c))
}

/// Check whether a string ends with the given character
///
/// # Arguments
///
/// * `s` - The string to check, or `None`
/// * `c` - The character to compare against
///
/// # Returns
///
/// `false` for `None` or empty input, otherwise whether the last character
/// equals `c`
///
/// # Example
///
/// ```rust
/// use platform_utils::strings::ends_with_char;
///
/// assert!(ends_with_char(Some("abc"), 'c'));
/// assert!(!ends_with_char(Some(""), 'c'));
/// assert!(!ends_with_char(None, 'c'));
/// ```
pub fn ends_with_char(s: Option<&str>, c: char) -> bool {
    s.is_some_and(|s| s.chars().next_back() == Some(c))
}

/// Number of bytes the string occupies when encoded as UTF-8
///
/// Rust strings are already UTF-8, so multi-byte code points and characters
/// beyond the basic multilingual plane are accounted for by construction.
///
/// # Arguments
///
/// * `s` - The string to measure, or `None`
///
/// # Returns
///
/// 0 for `None` or empty input, otherwise the UTF-8 byte length
///
/// # Example
///
/// ```rust
/// use platform_utils::strings::utf8_encoded_length;
///
/// assert_eq!(utf8_encoded_length(Some("é")), 2);
/// assert_eq!(utf8_encoded_length(Some("")), 0);
/// assert_eq!(utf8_encoded_length(None), 0);
/// ```
pub fn utf8_encoded_length(s: Option<&str>) -> usize {
    s.map_or(0, str::len)
}

/// Strip exactly one trailing occurrence of the given character
///
/// # Arguments
///
/// * `s` - The string to trim, or `None`
/// * `c` - The trailing character to remove
///
/// # Returns
///
/// `None` for `None` input; the input minus one trailing `c` when present,
/// otherwise the input unchanged. Always a borrow of the input
///
/// # Example
///
/// ```rust
/// use platform_utils::strings::remove_trailing_char;
///
/// assert_eq!(remove_trailing_char(Some("abc/"), '/'), Some("abc"));
/// assert_eq!(remove_trailing_char(Some("abc"), '/'), Some("abc"));
/// assert_eq!(remove_trailing_char(None, '/'), None);
/// ```
pub fn remove_trailing_char(s: Option<&str>, c: char) -> Option<&str> {
    let s = s?;
    Some(s.strip_suffix(c).unwrap_or(s))
}
