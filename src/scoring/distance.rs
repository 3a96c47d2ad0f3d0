// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! How far a document's ranges are from the query's ranges.
//!
//! Overlap dominates everything: if any query range shares a single location
//! with any document range, the answer is `Overlapping` no matter how far
//! apart every other pair is. Otherwise the answer is the smallest gap over
//! all (query, document) pairs, measured along the packed key order.
//!
//! # Algorithm
//!
//! The all-pairs minimum is O(n·m). We get the same answer from one sorted
//! sweep: tag every range with its side, sort by `(start, end)`, and keep the
//! furthest-reaching range seen so far on each side. A range only needs to be
//! compared with the furthest-reaching range of the other side that starts no
//! later than it does:
//!
//! ```text
//!  query     [=====]        [==]
//!  document          [==]          [=====]
//!                 ^gap^  ^gap^  ^gap^
//! ```
//!
//! For any disjoint pair `(a, b)` with `a` sorted first, the reach of `a`'s
//! side is at least `a.end`, so the sweep's gap for `b` is never larger than
//! `b.start - a.end`, and it is always the gap of a real pair. Sorting
//! dominates: O((n+m) log(n+m)).
//!
//! [`range_distance_pairwise`] is the obvious O(n·m) version, kept as the
//! differential-testing oracle.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::config::CHAPTER_WEIGHT;
use crate::contracts::{check_gap_positive, check_sorted_by_start};
use crate::types::{Range, RangeSet};

/// Unit in which gaps are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Whole chapters, rounded up. A gap inside one chapter is 1, never 0.
    #[default]
    Chapter,
    /// Raw packed-key difference: verse = 1, chapter = 1 000, book = 1 000 000.
    Verse,
}

impl DistanceUnit {
    /// Convert a positive packed-key gap into this unit.
    ///
    /// Monotone, and a positive gap always stays positive.
    #[inline]
    pub fn measure(self, key_gap: u32) -> u32 {
        match self {
            DistanceUnit::Chapter => key_gap.div_ceil(CHAPTER_WEIGHT),
            DistanceUnit::Verse => key_gap,
        }
    }
}

/// Outcome of comparing a query range set with a document range set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proximity {
    /// Some query range overlaps some document range.
    Overlapping,
    /// No overlap; the smallest gap between any pair.
    Gap(NonZeroU32),
    /// The document has no ranges to compare against.
    Unrelated,
}

impl Proximity {
    /// Numeric distance: `Some(0)` for overlap, `None` when unrelated.
    pub fn distance(self) -> Option<u32> {
        match self {
            Proximity::Overlapping => Some(0),
            Proximity::Gap(d) => Some(d.get()),
            Proximity::Unrelated => None,
        }
    }

    fn from_key_gap(key_gap: Option<u32>, unit: DistanceUnit) -> Self {
        match key_gap {
            None => Proximity::Unrelated,
            // measure() never rounds a positive gap down to zero
            Some(gap) => NonZeroU32::new(unit.measure(gap)).map_or(Proximity::Overlapping, Proximity::Gap),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Query = 0,
    Document = 1,
}

impl Side {
    #[inline]
    fn other(self) -> Side {
        match self {
            Side::Query => Side::Document,
            Side::Document => Side::Query,
        }
    }
}

/// Distance between a query range set and a document range set.
///
/// Neither set needs to be sorted or disjoint. An empty set on either side
/// yields `Unrelated`.
pub fn range_distance(query: &RangeSet, document: &RangeSet, unit: DistanceUnit) -> Proximity {
    if query.is_empty() || document.is_empty() {
        return Proximity::Unrelated;
    }

    let mut tagged: Vec<(Range, Side)> = Vec::with_capacity(query.len() + document.len());
    tagged.extend(query.iter().map(|r| (*r, Side::Query)));
    tagged.extend(document.iter().map(|r| (*r, Side::Document)));
    tagged.sort_unstable_by(|a, b| a.0.cmp(&b.0));

    // Furthest-reaching range seen so far, per side
    let mut reach: [Option<Range>; 2] = [None, None];
    let mut best: Option<u32> = None;

    for &(range, side) in &tagged {
        if let Some(other) = reach[side.other() as usize] {
            match other.gap(&range) {
                None => return Proximity::Overlapping,
                Some(gap) => {
                    check_gap_positive(gap, &other, &range);
                    best = Some(best.map_or(gap, |b| b.min(gap)));
                }
            }
        }

        let slot = &mut reach[side as usize];
        if slot.map_or(true, |r| range.end() > r.end()) {
            *slot = Some(range);
        }
    }

    debug_assert!(best.is_some(), "non-empty sides always produce a gap or an overlap");
    Proximity::from_key_gap(best, unit)
}

/// All-pairs distance. Same answer as [`range_distance`], O(n·m).
pub fn range_distance_pairwise(
    query: &RangeSet,
    document: &RangeSet,
    unit: DistanceUnit,
) -> Proximity {
    let query = query.sorted();
    let document = document.sorted();
    check_sorted_by_start(&query);
    check_sorted_by_start(&document);

    let mut best: Option<u32> = None;
    for q in &query {
        for d in &document {
            match q.gap(d) {
                None => return Proximity::Overlapping,
                Some(gap) => best = Some(best.map_or(gap, |b| b.min(gap))),
            }
        }
    }
    Proximity::from_key_gap(best, unit)
}
