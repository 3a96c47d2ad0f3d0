//! Range construction property tests.
//!
//! - `start <= end` always builds, `start > end` always fails with both keys
//! - Overlap is symmetric and agrees with `gap`
//! - Key text parses back to the same key

use bible_ranges::{Range, VerseKey};
use proptest::prelude::*;

/// Any valid key: every packed value in `[MIN, MAX]` is one.
fn key_strategy() -> impl Strategy<Value = VerseKey> {
    (VerseKey::MIN.as_u32()..=VerseKey::MAX.as_u32()).prop_map(|packed| {
        VerseKey::from_u32(packed).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: construction succeeds exactly when `start <= end`.
    #[test]
    fn prop_range_new_checks_order(a in key_strategy(), b in key_strategy()) {
        match Range::new(a, b) {
            Ok(range) => {
                prop_assert!(a <= b);
                prop_assert_eq!(range.start(), a);
                prop_assert_eq!(range.end(), b);
            }
            Err(err) => {
                prop_assert!(a > b);
                prop_assert_eq!(err.start, a);
                prop_assert_eq!(err.end, b);
            }
        }
    }

    /// Property: the ordered pair always builds.
    #[test]
    fn prop_sorted_pair_builds(a in key_strategy(), b in key_strategy()) {
        prop_assert!(Range::new(a.min(b), a.max(b)).is_ok());
        if a != b {
            prop_assert!(Range::new(a.max(b), a.min(b)).is_err());
        }
    }

    /// Property: overlap is symmetric and is exactly "no gap".
    #[test]
    fn prop_overlap_matches_gap(a in key_strategy(), b in key_strategy(), c in key_strategy(), d in key_strategy()) {
        let left = Range::new(a.min(b), a.max(b)).unwrap();
        let right = Range::new(c.min(d), c.max(d)).unwrap();
        prop_assert_eq!(left.overlaps(&right), right.overlaps(&left));
        prop_assert_eq!(left.overlaps(&right), left.gap(&right).is_none());
        prop_assert_eq!(left.gap(&right), right.gap(&left));
    }

    /// Property: the eight-digit text form parses back to the same key.
    #[test]
    fn prop_key_text_round_trip(k in key_strategy()) {
        let text = k.to_string();
        prop_assert_eq!(text.len(), 8);
        prop_assert_eq!(text.parse::<VerseKey>().unwrap(), k);
    }
}
