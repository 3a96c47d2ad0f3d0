// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! Everything here panics on invalid input; only use it with literals.

#![doc(hidden)]

use crate::types::{QueryRanges, Range, RangeSet, VerseKey};

/// Build a location key from literal components.
pub fn key(book: u32, chapter: u32, verse: u32) -> VerseKey {
    VerseKey::new(book, chapter, verse).expect("test key out of range")
}

/// Build a range from two `(book, chapter, verse)` triples.
pub fn range(start: (u32, u32, u32), end: (u32, u32, u32)) -> Range {
    Range::new(key(start.0, start.1, start.2), key(end.0, end.1, end.2))
        .expect("test range reversed")
}

/// Single-location range.
pub fn point(book: u32, chapter: u32, verse: u32) -> Range {
    Range::point(key(book, chapter, verse))
}

/// Range set from ranges.
pub fn set_of(ranges: &[Range]) -> RangeSet {
    RangeSet::from(ranges.to_vec())
}

/// Non-empty query from ranges.
pub fn query_of(ranges: &[Range]) -> QueryRanges {
    QueryRanges::new(set_of(ranges)).expect("test query empty")
}
