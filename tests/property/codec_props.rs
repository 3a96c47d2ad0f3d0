//! Field codec property tests.
//!
//! - Round trip: `decode(encode(r)) == r` as sets
//! - Canonical form: encoding is idempotent through a decode
//! - Decoding garbage returns an error, never panics
//! - One reversed entry poisons the whole field

use bible_ranges::{FieldErrorReason, RangeCodec, RangeSet};
use proptest::prelude::*;

use crate::common::{non_empty_set_strategy, range_set_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: any valid range set survives a round trip.
    #[test]
    fn prop_round_trip(set in range_set_strategy()) {
        let codec = RangeCodec::default();
        let decoded = codec.decode(&codec.encode(&set)).unwrap();
        prop_assert_eq!(decoded, set);
    }

    /// Property: round trip holds for a custom alphabet too.
    #[test]
    fn prop_round_trip_custom_separators(set in range_set_strategy()) {
        let codec = RangeCodec::with_separators('|', ':').unwrap();
        let decoded = codec.decode(&codec.encode(&set)).unwrap();
        prop_assert_eq!(decoded, set);
    }

    /// Property: the encoded form is canonical.
    #[test]
    fn prop_encoding_is_canonical(set in range_set_strategy()) {
        let codec = RangeCodec::default();
        let once = codec.encode(&set);
        let twice = codec.encode(&codec.decode(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    /// Property: field order does not matter to the decoded set.
    #[test]
    fn prop_entry_order_irrelevant(set in non_empty_set_strategy()) {
        let codec = RangeCodec::default();
        let encoded = codec.encode(&set);
        let reversed: Vec<&str> = encoded.split(',').rev().collect();
        let decoded = codec.decode(&reversed.join(",")).unwrap();
        prop_assert_eq!(decoded, set);
    }

    /// Property: decoding arbitrary text never panics.
    #[test]
    fn prop_decode_never_panics(text in "[0-9,\\- a]{0,60}") {
        let _ = RangeCodec::default().decode(&text);
    }

    /// Property: one reversed entry fails the whole decode.
    #[test]
    fn prop_reversed_entry_fails_whole_field(set in non_empty_set_strategy()) {
        let codec = RangeCodec::default();
        let sorted = set.sorted();
        let victim = sorted.iter().position(|r| r.start() < r.end());
        prop_assume!(victim.is_some());
        let victim = victim.unwrap();

        let entries: Vec<String> = sorted
            .iter()
            .enumerate()
            .map(|(i, r)| {
                if i == victim {
                    format!("{}-{}", r.end(), r.start())
                } else {
                    format!("{}-{}", r.start(), r.end())
                }
            })
            .collect();

        let err = codec.decode(&entries.join(",")).unwrap_err();
        prop_assert_eq!(err.entry, victim);
        prop_assert!(matches!(err.reason, FieldErrorReason::Range(_)));
    }
}

#[test]
fn empty_set_encodes_to_empty_field() {
    let codec = RangeCodec::default();
    assert_eq!(codec.encode(&RangeSet::new()), "");
    assert!(codec.decode("").unwrap().is_empty());
}
