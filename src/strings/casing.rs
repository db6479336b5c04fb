// src/strings/casing.rs
//! Conversions between the usual identifier casings.

use std::sync::LazyLock;

use regex::Regex;

static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([a-z0-9])([A-Z])").expect("case boundary pattern is valid"));

static WORD_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\W_]+").expect("word separator pattern is valid"));

/// Converts `HelloWorld` or `helloWorld` to `hello_world`.
///
/// Blank input comes back unchanged.
pub fn snake_case(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_owned();
    }
    CASE_BOUNDARY.replace_all(input, "${1}_${2}").to_lowercase()
}

/// Converts `HelloWorld` or `helloWorld` to `hello-world`.
///
/// Blank input comes back unchanged.
pub fn kebab_case(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_owned();
    }
    CASE_BOUNDARY.replace_all(input, "${1}-${2}").to_lowercase()
}

/// Lowercases the first character and leaves the rest untouched, so
/// `HelloWorld` becomes `helloWorld` but `HELLO` becomes `hELLO`.
pub fn camel_case(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercases the first letter of every whitespace-separated word and
/// lowercases everything else.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Splits on any run of non-alphanumeric characters and capitalizes each
/// word, so `hello_world` and `hello world` both become `HelloWorld`.
///
/// Blank input comes back unchanged.
pub fn pascal_case(input: &str) -> String {
    if input.trim().is_empty() {
        return input.to_owned();
    }
    WORD_SEPARATORS
        .split(input)
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
