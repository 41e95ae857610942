//! Property tests for reference rewriting.

use proptest::prelude::*;

use webpify::application::ReplacementRules;
use webpify::domain::entities::ReplacementCandidate;

fn reference() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(/?[a-z]{1,6}/){0,2}[a-z+() ]{1,8}\\.png").unwrap()
}

fn filler() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z<>=\"' /\\n]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: One pass removes every original text; a second pass changes nothing.
    #[test]
    fn property_rewrite_is_idempotent(
        refs in proptest::collection::vec(reference(), 1..5),
        fillers in proptest::collection::vec(filler(), 6),
    ) {
        let candidates: Vec<ReplacementCandidate> = refs
            .iter()
            .filter_map(|r| ReplacementCandidate::swap_extension(r.clone(), "webp"))
            .collect();
        let rules = ReplacementRules::compile(&candidates);

        let mut content = String::new();
        for (i, r) in refs.iter().enumerate() {
            content.push_str(&fillers[i % fillers.len()]);
            content.push_str(r);
        }

        let once = rules
            .apply(&content)
            .map(|(out, _)| out)
            .unwrap_or_else(|| content.clone());

        for c in &candidates {
            prop_assert!(!once.contains(c.original()), "{:?} left in {:?}", c.original(), once);
        }
        prop_assert!(rules.apply(&once).is_none());
    }

    /// PROPERTY: Content containing no candidate is reported as unchanged.
    #[test]
    fn property_no_match_means_no_change(content in "[a-z <>=\"/]{0,80}") {
        let candidates = vec![
            ReplacementCandidate::swap_extension("/images/logo.png", "webp").unwrap(),
        ];
        let rules = ReplacementRules::compile(&candidates);
        prop_assert!(rules.apply(&content).is_none());
    }
}
