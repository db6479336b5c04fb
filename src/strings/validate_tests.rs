// src/strings/validate_tests.rs
#[cfg(test)]
mod tests {
    use crate::strings::validate::{
        contains_only_digits, ends_with_any, is_alphabetic, is_numeric, is_palindrome,
        is_valid_email, is_valid_isbn, is_valid_url, starts_with_any,
    };

    #[test]
    fn email_accepts_the_usual_shape() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user@sub.domain.org"));
    }

    #[test]
    fn email_rejects_malformed_input() {
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("spaced name@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn url_accepts_http_and_https_only() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/path?query=1"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("invalid-url"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn alphabetic_rejects_digits_and_empty_input() {
        assert!(is_alphabetic("abc"));
        assert!(!is_alphabetic("abc123"));
        assert!(!is_alphabetic(""));
    }

    #[test]
    fn numeric_accepts_integers_and_decimals() {
        assert!(is_numeric("123"));
        assert!(is_numeric("123.45"));
        assert!(is_numeric("-12.5"));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric(""));
    }

    #[test]
    fn digits_only_means_ascii_digits() {
        assert!(contains_only_digits("123"));
        assert!(!contains_only_digits("123a"));
        assert!(!contains_only_digits("12.3"));
        assert!(!contains_only_digits(""));
    }

    #[test]
    fn palindrome_ignores_case_but_not_emptiness() {
        assert!(is_palindrome("madam"));
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("Madam"));
        assert!(!is_palindrome("hello"));
        assert!(!is_palindrome(""));
    }

    #[test]
    fn prefix_and_suffix_sets_match_any_entry() {
        assert!(starts_with_any("hello world", &["hello", "hi"]));
        assert!(!starts_with_any("hello world", &["bye"]));
        assert!(!starts_with_any("hello world", &[]));
        assert!(ends_with_any("hello world", &["world", "earth"]));
        assert!(!ends_with_any("hello world", &["mars"]));
    }

    #[test]
    fn isbn10_checksum_is_enforced() {
        assert!(is_valid_isbn("0-306-40615-2"));
        assert!(is_valid_isbn("043942089X"));
        assert!(!is_valid_isbn("1234567890"));
    }

    #[test]
    fn isbn13_checksum_is_enforced() {
        assert!(is_valid_isbn("978-3-16-148410-0"));
        assert!(is_valid_isbn("1234567890128"));
        assert!(!is_valid_isbn("1234567890123"));
    }

    #[test]
    fn isbn_rejects_other_lengths_and_junk() {
        assert!(!is_valid_isbn("123"));
        assert!(!is_valid_isbn(""));
        assert!(!is_valid_isbn("abcdefghij"));
    }
}
