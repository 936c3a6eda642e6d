/// Asserts that an expression matches a pattern, optionally guarded by a
/// predicate over the bindings of that pattern.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}

/// Asserts that a rendered page contains (or, with `!`, does not contain) the
/// given text. Prints the page on failure.
#[macro_export]
macro_rules! assert_page_contains {
    ($page:expr, ! $text:expr) => {{
        let page = &$page;
        let page: &str = ::core::convert::AsRef::as_ref(page);
        let text: &str = $text;
        ::core::assert!(
            !page.contains(text),
            "Expected page not to contain {text:?}, got:\n{page}"
        );
    }};
    ($page:expr, $text:expr) => {{
        let page = &$page;
        let page: &str = ::core::convert::AsRef::as_ref(page);
        let text: &str = $text;
        ::core::assert!(
            page.contains(text),
            "Expected page to contain {text:?}, got:\n{page}"
        );
    }};
}

#[cfg(test)]
mod tests {
    #[derive(Debug)]
    enum Outcome {
        Accepted(u32),
        Rejected,
    }

    #[test]
    fn matches_pattern() {
        assert_matches!(Outcome::Accepted(3), Outcome::Accepted(_));
        assert_matches!(Outcome::Accepted(3), Outcome::Accepted(n) if *n == 3);
    }

    #[test]
    #[should_panic = "did not match pattern"]
    fn pattern_mismatch() {
        assert_matches!(Outcome::Rejected, Outcome::Accepted(_));
    }

    #[test]
    #[should_panic = "does not match predicate"]
    fn predicate_mismatch() {
        assert_matches!(Outcome::Accepted(2), Outcome::Accepted(n) if *n == 3);
    }

    #[test]
    fn page_contains() {
        let page = String::from("<h1>Contact Form</h1>");
        assert_page_contains!(page, "Contact Form");
        assert_page_contains!(page, !"You Submitted");
    }
}
