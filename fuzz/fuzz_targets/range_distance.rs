// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sweep distance against the all-pairs reference.
//!
//! The sweep keeps one furthest reach per side. Any bookkeeping slip shows up
//! as a disagreement with the quadratic version on some arbitrary input.

#![no_main]

use arbitrary::Arbitrary;
use bible_ranges::{
    range_distance, range_distance_pairwise, DistanceUnit, Range, RangeSet, VerseKey,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    query: Vec<(u32, u16)>,
    doc: Vec<(u32, u16)>,
    verse_unit: bool,
}

/// Map raw fuzz bytes onto valid ranges. Every packed value in
/// `[MIN, MAX]` is a valid key, so a clamp is enough.
fn to_set(raw: &[(u32, u16)]) -> RangeSet {
    let lo = VerseKey::MIN.as_u32();
    let hi = VerseKey::MAX.as_u32();
    raw.iter()
        .take(64)
        .filter_map(|&(start, span)| {
            let start = lo + start % (hi - lo + 1);
            let end = start.saturating_add(u32::from(span)).min(hi);
            let start = VerseKey::from_u32(start).ok()?;
            let end = VerseKey::from_u32(end).ok()?;
            Range::new(start, end).ok()
        })
        .collect()
}

fuzz_target!(|input: Input| {
    let query = to_set(&input.query);
    let doc = to_set(&input.doc);
    let unit = if input.verse_unit {
        DistanceUnit::Verse
    } else {
        DistanceUnit::Chapter
    };

    let sweep = range_distance(&query, &doc, unit);
    let pairwise = range_distance_pairwise(&query, &doc, unit);
    assert_eq!(sweep, pairwise, "sweep disagrees with pairwise");
    assert_eq!(sweep, range_distance(&doc, &query, unit), "not symmetric");
});
