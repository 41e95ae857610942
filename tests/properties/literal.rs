//! Property tests for the literal matcher.

use proptest::prelude::*;

use webpify::domain::services::LiteralMatcher;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any text, metacharacters included, builds a matcher and never panics.
    #[test]
    fn property_any_literal_compiles(literal in ".{0,40}", haystack in ".{0,80}") {
        let matcher = LiteralMatcher::new(&literal).unwrap();
        let _ = matcher.count(&haystack);
        let _ = matcher.replace_all(&haystack, "$0 ${1}");
    }

    /// PROPERTY: Counts agree with `str::matches` and replacement is literal.
    #[test]
    fn property_matches_like_str(
        literal in "[a-c.+*()$\\\\]{1,4}",
        haystack in "[a-c.+*()$\\\\ ]{0,60}",
    ) {
        let matcher = LiteralMatcher::new(&literal).unwrap();

        prop_assert_eq!(matcher.count(&haystack), haystack.matches(literal.as_str()).count());
        prop_assert_eq!(
            matcher.replace_all(&haystack, "$1").into_owned(),
            haystack.replace(literal.as_str(), "$1")
        );
    }
}
