// src/strings/casing_tests.rs
#[cfg(test)]
mod tests {
    use crate::strings::casing::{camel_case, kebab_case, pascal_case, snake_case, title_case};

    #[test]
    fn snake_case_splits_on_case_boundaries() {
        assert_eq!(snake_case("helloWorld"), "hello_world");
        assert_eq!(snake_case("HelloWorld"), "hello_world");
        assert_eq!(snake_case("hello_world"), "hello_world");
    }

    #[test]
    fn snake_case_treats_digits_as_lowercase() {
        assert_eq!(snake_case("Hello123World"), "hello123_world");
    }

    #[test]
    fn snake_case_leaves_blank_input_alone() {
        assert_eq!(snake_case(""), "");
        assert_eq!(snake_case("   "), "   ");
    }

    #[test]
    fn kebab_case_splits_on_case_boundaries() {
        assert_eq!(kebab_case("helloWorld"), "hello-world");
        assert_eq!(kebab_case("HelloWorld"), "hello-world");
        assert_eq!(kebab_case("hello-world"), "hello-world");
    }

    #[test]
    fn camel_case_only_lowers_the_first_character() {
        assert_eq!(camel_case("helloWorld"), "helloWorld");
        assert_eq!(camel_case("HelloWorld"), "helloWorld");
        assert_eq!(camel_case("HELLO"), "hELLO");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("HELLO WORLD"), "Hello World");
        assert_eq!(title_case("hElLo WoRlD"), "Hello World");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn pascal_case_joins_words_from_any_separator() {
        assert_eq!(pascal_case("hello world"), "HelloWorld");
        assert_eq!(pascal_case("HELLO WORLD"), "HelloWorld");
        assert_eq!(pascal_case("hElLo WoRlD"), "HelloWorld");
        assert_eq!(pascal_case("hello_world"), "HelloWorld");
        assert_eq!(pascal_case("hello-world"), "HelloWorld");
    }
}
