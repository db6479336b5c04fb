// src/strings/validate.rs
//! Shape checks for common text formats.

use std::sync::LazyLock;

use http::Uri;
use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Pragmatic email check: one `@`, no whitespace, a dotted domain.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL.is_match(input)
}

/// Accepts absolute `http` and `https` URLs only.
pub fn is_valid_url(input: &str) -> bool {
    let Ok(uri) = input.parse::<Uri>() else {
        return false;
    };
    let scheme_is_web = uri
        .scheme_str()
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"));
    scheme_is_web && uri.authority().is_some()
}

/// True when the input is non-empty and every character is a letter.
pub fn is_alphabetic(input: &str) -> bool {
    !input.is_empty() && input.chars().all(char::is_alphabetic)
}

/// True when the input parses as a decimal number, surrounding whitespace
/// aside.
pub fn is_numeric(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok()
}

/// True when the input is non-empty and every character is an ASCII digit.
pub fn contains_only_digits(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}

/// Case-insensitive palindrome check. The empty string is not considered a
/// palindrome.
pub fn is_palindrome(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    let folded: Vec<char> = input.chars().flat_map(char::to_lowercase).collect();
    folded.iter().eq(folded.iter().rev())
}

/// True when the input starts with any of the given prefixes.
pub fn starts_with_any(input: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| input.starts_with(prefix))
}

/// True when the input ends with any of the given suffixes.
pub fn ends_with_any(input: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| input.ends_with(suffix))
}

/// Validates an ISBN-10 or ISBN-13, ignoring hyphens and spaces.
pub fn is_valid_isbn(input: &str) -> bool {
    let digits: String = input.chars().filter(|c| *c != '-' && *c != ' ').collect();
    match digits.len() {
        10 => is_valid_isbn10(digits.as_bytes()),
        13 => is_valid_isbn13(digits.as_bytes()),
        _ => false,
    }
}

/// ISBN-10 checksum: positions weighted 10 down to 2, the final character
/// is a digit or `X` standing for ten, and the total must divide by 11.
fn is_valid_isbn10(isbn: &[u8]) -> bool {
    if !isbn[..9].iter().all(u8::is_ascii_digit) {
        return false;
    }
    let mut sum: u32 = 0;
    for (index, digit) in isbn[..9].iter().copied().enumerate() {
        sum += (10 - index as u32) * u32::from(digit - b'0');
    }
    sum += match isbn[9] {
        b'X' => 10,
        digit if digit.is_ascii_digit() => u32::from(digit - b'0'),
        _ => return false,
    };
    sum % 11 == 0
}

/// ISBN-13 checksum: digits alternate weights 1 and 3, and the last digit
/// must bring the total to a multiple of 10.
fn is_valid_isbn13(isbn: &[u8]) -> bool {
    if !isbn.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let sum: u32 = isbn[..12]
        .iter()
        .copied()
        .enumerate()
        .map(|(index, digit)| {
            let value = u32::from(digit - b'0');
            if index % 2 == 0 { value } else { value * 3 }
        })
        .sum();
    let check = (10 - (sum % 10)) % 10;
    u32::from(isbn[12] - b'0') == check
}
