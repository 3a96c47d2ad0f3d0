//! Distance property tests.
//!
//! - The sweep agrees with the all-pairs version and the raw-key oracle
//! - Distance is symmetric and ignores input order
//! - Overlap dominates: one overlapping pair forces distance 0
//! - Adding ranges to either side never increases the distance

use bible_ranges::{range_distance, range_distance_pairwise, DistanceUnit, Proximity, Range, RangeSet};
use proptest::prelude::*;

use crate::common::{non_empty_set_strategy, range_set_strategy, range_strategy};
use crate::oracles::{oracle_distance, Expected};

fn units() -> impl Strategy<Value = DistanceUnit> {
    prop::sample::select(vec![DistanceUnit::Chapter, DistanceUnit::Verse])
}

fn as_expected(p: Proximity) -> Expected {
    match p {
        Proximity::Overlapping => Expected::Overlap,
        Proximity::Gap(d) => Expected::Gap(d.get()),
        Proximity::Unrelated => Expected::Empty,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: sweep == all pairs.
    #[test]
    fn prop_sweep_matches_pairwise(
        query in range_set_strategy(),
        doc in range_set_strategy(),
        unit in units(),
    ) {
        prop_assert_eq!(
            range_distance(&query, &doc, unit),
            range_distance_pairwise(&query, &doc, unit)
        );
    }

    /// Property: sweep == oracle over raw keys.
    #[test]
    fn prop_sweep_matches_oracle(
        query in range_set_strategy(),
        doc in range_set_strategy(),
        unit in units(),
    ) {
        prop_assert_eq!(
            as_expected(range_distance(&query, &doc, unit)),
            oracle_distance(&query, &doc, unit)
        );
    }

    /// Property: swapping query and document changes nothing.
    #[test]
    fn prop_symmetric(query in range_set_strategy(), doc in range_set_strategy()) {
        prop_assert_eq!(
            range_distance(&query, &doc, DistanceUnit::Verse),
            range_distance(&doc, &query, DistanceUnit::Verse)
        );
    }

    /// Property: input order does not matter.
    #[test]
    fn prop_order_independent(query in range_set_strategy(), doc in range_set_strategy()) {
        let reversed_query: RangeSet = query.iter().rev().copied().collect();
        let reversed_doc: RangeSet = doc.iter().rev().copied().collect();
        prop_assert_eq!(
            range_distance(&query, &doc, DistanceUnit::Chapter),
            range_distance(&reversed_query, &reversed_doc, DistanceUnit::Chapter)
        );
    }

    /// Property: any overlapping pair forces `Overlapping`, whatever else is there.
    #[test]
    fn prop_overlap_dominates(
        query in non_empty_set_strategy(),
        mut doc in range_set_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = *pick.get(query.as_slice());
        // A single location inside the target overlaps it by construction
        doc.push(Range::point(target.end()));
        prop_assert_eq!(range_distance(&query, &doc, DistanceUnit::Chapter), Proximity::Overlapping);
    }

    /// Property: a disjoint result is never zero.
    #[test]
    fn prop_gap_is_positive(query in non_empty_set_strategy(), doc in non_empty_set_strategy()) {
        match range_distance(&query, &doc, DistanceUnit::Chapter) {
            Proximity::Gap(d) => prop_assert!(d.get() > 0),
            Proximity::Overlapping => {}
            Proximity::Unrelated => prop_assert!(false, "non-empty sides are never unrelated"),
        }
    }

    /// Property: more document ranges can only bring the document closer.
    #[test]
    fn prop_adding_ranges_never_increases_distance(
        query in non_empty_set_strategy(),
        doc in non_empty_set_strategy(),
        extra in range_strategy(),
    ) {
        let before = range_distance(&query, &doc, DistanceUnit::Verse).distance().unwrap();
        let mut grown = doc.clone();
        grown.push(extra);
        let after = range_distance(&query, &grown, DistanceUnit::Verse).distance().unwrap();
        prop_assert!(after <= before, "{} > {}", after, before);
    }
}
