//! Property tests for the documented invariants.

use proptest::prelude::*;
use stringx_core::{
    Exact, SplitMode, contains, join, split_token, starts_with, trim_copy, trim_in_place,
};

/// Greedy non-overlapping occurrence count, the reference for the split
/// section-count invariant.
fn count_occurrences(text: &[u8], pattern: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while pos + pattern.len() <= text.len() {
        if &text[pos..pos + pattern.len()] == pattern {
            count += 1;
            pos += pattern.len();
        } else {
            pos += 1;
        }
    }
    count
}

proptest! {
    #[test]
    fn prop_trim_is_idempotent(text in ".{0,40}") {
        let once = trim_copy(text.as_str());
        let twice = trim_copy(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_trim_in_place_agrees_with_copy(text in "[ a-c\\t]{0,24}") {
        let expect = trim_copy(text.as_str());
        let mut buf = text.clone().into_bytes();
        trim_in_place(&mut buf);
        prop_assert_eq!(buf, expect);
    }

    #[test]
    fn prop_split_join_round_trip(
        text in "[a-c,]{0,24}",
    ) {
        let mut sections: Vec<Vec<u8>> = Vec::new();
        split_token(&mut sections, text.as_str(), ",", SplitMode::KeepAll, Exact, true).unwrap();
        let mut rejoined: Vec<u8> = Vec::new();
        join(&mut rejoined, &sections, ",", true);
        prop_assert_eq!(rejoined, text.into_bytes());
    }

    #[test]
    fn prop_keep_all_section_count(
        text in "[ab ]{0,24}",
        pattern in "[ab ]{1,3}",
    ) {
        let mut sections: Vec<Vec<u8>> = Vec::new();
        split_token(
            &mut sections,
            text.as_str(),
            pattern.as_str(),
            SplitMode::KeepAll,
            Exact,
            true,
        )
        .unwrap();
        let occurrences = count_occurrences(text.as_bytes(), pattern.as_bytes());
        prop_assert_eq!(sections.len(), occurrences + 1);
    }

    #[test]
    fn prop_skip_empty_never_yields_empty(
        text in "[ab,]{0,24}",
    ) {
        let mut sections: Vec<Vec<u8>> = Vec::new();
        split_token(&mut sections, text.as_str(), ",", SplitMode::SkipEmpty, Exact, true).unwrap();
        prop_assert!(sections.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn prop_prefix_implies_contains(
        text in "[a-d]{0,16}",
        prefix_len in 0usize..8,
    ) {
        let cut = prefix_len.min(text.len());
        let prefix = &text[..cut];
        prop_assert!(starts_with(text.as_str(), prefix));
        prop_assert!(contains(text.as_str(), prefix));
    }

    #[test]
    fn prop_replace_then_search_finds_no_pattern(
        text in "[ab]{0,20}",
        replacement in "[cd]{1,3}",
    ) {
        // After replacing "ab" with units it cannot recreate, the pattern
        // is gone.
        let out = stringx_core::replace_all_copy(text.as_str(), "ab", replacement.as_str())
            .unwrap();
        prop_assert!(!contains(&out, "ab"));
    }
}
