//! Property tests for replacement-candidate generation.

use proptest::prelude::*;

use webpify::config::CandidatesConfig;
use webpify::domain::entities::{ConvertedAsset, ReplacementCandidate};
use webpify::domain::services::CandidateGenerator;
use webpify::domain::value_objects::ImageRootAlias;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_+() -]{1,12}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Reversing the extension swap reproduces the original text.
    #[test]
    fn property_swap_extension_round_trips(
        dirs in proptest::collection::vec(segment(), 0..4),
        stem in segment(),
        ext in "[A-Za-z]{1,4}",
    ) {
        let mut reference = dirs.join("/");
        if !reference.is_empty() {
            reference.push('/');
        }
        reference.push_str(&format!("{stem}.{ext}"));

        let candidate = ReplacementCandidate::swap_extension(reference.clone(), "webp").unwrap();

        prop_assert_eq!(candidate.reverse(), reference.clone());
        prop_assert!(candidate.replacement().ends_with(".webp"));
        prop_assert_eq!(
            candidate.replacement().strip_suffix("webp"),
            reference.strip_suffix(ext.as_str())
        );
    }

    /// PROPERTY: Every generated candidate names the image and swaps only its extension.
    #[test]
    fn property_generated_candidates_end_with_relative_path(
        root_dirs in proptest::collection::vec(segment(), 1..3),
        sub_dirs in proptest::collection::vec(segment(), 0..3),
        stem in segment(),
    ) {
        let root = format!("/project/{}", root_dirs.join("/"));
        let mut relative = sub_dirs.join("/");
        if !relative.is_empty() {
            relative.push('/');
        }
        relative.push_str(&stem);
        // The unprefixed form is a strict suffix of the relative path.
        prop_assume!(!relative.starts_with("images/"));

        let asset = ConvertedAsset::new(
            format!("{root}/{relative}.png"),
            format!("{root}/{relative}.webp"),
        );
        let generator = CandidateGenerator::new(
            ImageRootAlias::new(&root_dirs.join("/")),
            &root,
            &CandidatesConfig::default(),
        );

        let candidates = generator.generate(&asset);

        prop_assert!(candidates.len() >= 5);
        let png_suffix = format!("{relative}.png");
        let webp_suffix = format!("{relative}.webp");
        for c in &candidates {
            prop_assert!(c.original().ends_with(&png_suffix));
            prop_assert!(c.replacement().ends_with(&webp_suffix));
        }
    }
}
