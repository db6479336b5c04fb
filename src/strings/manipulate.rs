// src/strings/manipulate.rs
//! Cleanup and reshaping helpers that never panic on odd input.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Cuts the input down to at most `max_chars` characters and appends `...`
/// when anything was removed. A zero-width request yields an empty string.
pub fn truncate_with_ellipsis(input: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if input.chars().count() <= max_chars {
        return input.to_owned();
    }
    let mut truncated: String = input.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// Character-based substring that clamps out-of-range indices instead of
/// panicking.
pub fn safe_substring(input: &str, start: usize, length: usize) -> String {
    input.chars().skip(start).take(length).collect()
}

/// Removes every whitespace character, not just spaces.
pub fn remove_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strips diacritics by decomposing and dropping combining marks, turning
/// `café` into `cafe`.
pub fn remove_accents(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect()
}

/// Keeps only letters and digits.
pub fn remove_non_alphanumeric(input: &str) -> String {
    input.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Applies each `(from, to)` replacement pair in order over the whole
/// string.
pub fn replace_multiple(input: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(input.to_owned(), |current, (from, to)| current.replace(from, to))
}

/// Reverses the characters of the input.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Reverses the word order, collapsing runs of whitespace to single spaces.
pub fn reverse_words(input: &str) -> String {
    input.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}
