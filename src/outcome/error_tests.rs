// src/outcome/error_tests.rs
#[cfg(test)]
mod tests {
    use crate::outcome::{Error, ErrorCategory, ErrorList};

    #[test]
    fn factories_fix_the_category() {
        assert_eq!(
            Error::generic("g", "generic").category(),
            ErrorCategory::Generic
        );
        assert_eq!(
            Error::validation("v", "invalid").category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            Error::not_found("n", "missing").category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            Error::conflict("c", "taken").category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            Error::authentication("a", "who are you").category(),
            ErrorCategory::Authentication
        );
        assert_eq!(
            Error::authorization("z", "not yours").category(),
            ErrorCategory::Authorization
        );
        assert_eq!(
            Error::unexpected("u", "surprise").category(),
            ErrorCategory::Unexpected
        );
    }

    #[test]
    fn new_keeps_code_and_description() {
        let error = Error::new("user.missing", "user does not exist", ErrorCategory::NotFound);
        assert_eq!(error.code(), "user.missing");
        assert_eq!(error.description(), "user does not exist");
        assert_eq!(error.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn none_sentinel_is_recognised() {
        assert!(Error::none().is_none());
        assert!(!Error::validation("v", "invalid").is_none());
        // A non-generic category is never the sentinel, even when blank.
        assert!(!Error::new("", "", ErrorCategory::Validation).is_none());
    }

    #[test]
    fn display_includes_code_when_present() {
        let with_code = Error::validation("email.format", "email is malformed");
        assert_eq!(with_code.to_string(), "email.format: email is malformed");

        let without_code = Error::new("", "something broke", ErrorCategory::Generic);
        assert_eq!(without_code.to_string(), "something broke");
    }

    #[test]
    fn category_as_str_roundtrips_through_display() {
        assert_eq!(ErrorCategory::NotFound.as_str(), "not_found");
        assert_eq!(ErrorCategory::Authentication.to_string(), "authentication");
    }

    #[test]
    fn equality_ignores_the_attached_source() {
        let plain = Error::unexpected("io", "disk failed");
        let sourced =
            Error::unexpected("io", "disk failed").with_source(std::io::Error::other("disk"));
        assert_eq!(plain, sourced);
        assert!(sourced.source_ref().is_some());
        assert!(plain.source_ref().is_none());
    }

    #[test]
    fn source_is_reachable_through_std_error() {
        let error = Error::unexpected("io", "disk failed").with_source(std::io::Error::other("disk"));
        let source = std::error::Error::source(&error).expect("source should be attached");
        assert_eq!(source.to_string(), "disk");
    }

    #[test]
    fn serialization_omits_the_source() {
        let error = Error::conflict("slug.taken", "slug already in use")
            .with_source(std::io::Error::other("db"));
        let json = serde_json::to_value(&error).expect("error should serialize");
        assert_eq!(json["code"], "slug.taken");
        assert_eq!(json["description"], "slug already in use");
        assert_eq!(json["category"], "conflict");
        assert!(json.get("source").is_none());
    }

    #[test]
    fn list_of_one_exposes_the_primary() {
        let list = ErrorList::new(Error::validation("v", "invalid"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.primary().code(), "v");
        assert!(!list.is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let list = ErrorList::from_vec(vec![
            Error::validation("first", "a"),
            Error::validation("second", "b"),
            Error::conflict("third", "c"),
        ]);
        let codes: Vec<&str> = list.iter().map(Error::code).collect();
        assert_eq!(codes, ["first", "second", "third"]);
        assert_eq!(list.primary().code(), "first");
    }

    #[test]
    fn list_reports_contained_categories() {
        let list = ErrorList::from_vec(vec![
            Error::validation("v", "invalid"),
            Error::conflict("c", "taken"),
        ]);
        assert!(list.contains_category(ErrorCategory::Validation));
        assert!(list.contains_category(ErrorCategory::Conflict));
        assert!(!list.contains_category(ErrorCategory::NotFound));
    }

    #[test]
    fn list_display_joins_entries() {
        let list = ErrorList::from_vec(vec![
            Error::validation("a", "first"),
            Error::validation("b", "second"),
        ]);
        assert_eq!(list.to_string(), "a: first; b: second");
    }

    #[test]
    fn owned_iteration_yields_errors_in_order() {
        let list = ErrorList::from_vec(vec![
            Error::validation("a", "first"),
            Error::validation("b", "second"),
        ]);
        let codes: Vec<String> = list
            .into_iter()
            .map(|error| error.code().to_owned())
            .collect();
        assert_eq!(codes, ["a", "b"]);
    }

    #[test]
    #[should_panic(expected = "cannot be empty")]
    fn list_rejects_empty_input() {
        let _ = ErrorList::from_vec(Vec::new());
    }

    #[test]
    #[should_panic(expected = "none sentinel")]
    fn list_rejects_the_none_sentinel() {
        let _ = ErrorList::new(Error::none());
    }

    #[test]
    #[should_panic(expected = "none sentinel")]
    fn list_rejects_the_sentinel_hidden_in_a_batch() {
        let _ = ErrorList::from_vec(vec![Error::validation("v", "invalid"), Error::none()]);
    }
}
