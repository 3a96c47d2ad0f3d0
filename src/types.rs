// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types everything else is built from.
//!
//! A scripture location is packed into one integer, `BBCCCVVV`, so that the
//! total order over locations is plain integer order. Ranges are closed
//! intervals over that order, and a range set is whatever a document (or a
//! query) says it is about.
//!
//! # Invariants
//!
//! - **VerseKey**: `1 <= book <= 99`, `chapter <= 999`, `verse <= 999`.
//!   The eight-digit text form sorts exactly like the integer.
//!
//! - **Range**: `start <= end`. Checked at construction, never again.
//!
//! - **RangeSet**: no ordering or disjointness guarantee. Equality is set
//!   equality, so two sets listing the same ranges in a different order
//!   (or with duplicates) compare equal.

use std::fmt;
use std::str::FromStr;

use crate::config::{
    BOOK_WEIGHT, CHAPTER_WEIGHT, KEY_LENGTH, MAX_BOOK, MAX_CHAPTER, MAX_VERSE,
};
use crate::contracts::check_range_well_formed;
use crate::error::{EmptyQueryError, InvalidKeyError, InvalidRangeError};

// =============================================================================
// DOCUMENT IDS
// =============================================================================

/// Type-safe document identifier, as handed out by the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// LOCATION KEYS
// =============================================================================

/// A scripture location (book, chapter, verse) packed as `BBCCCVVV`.
///
/// Chapter and verse `0` mean "before the first", `999` means "after the
/// last", which is how whole chapters and books are stored:
/// `01003000-01003999` covers all of Genesis 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VerseKey(u32);

impl VerseKey {
    /// Smallest representable key.
    pub const MIN: VerseKey = VerseKey(BOOK_WEIGHT);

    /// Largest representable key.
    pub const MAX: VerseKey = VerseKey(MAX_BOOK * BOOK_WEIGHT + MAX_CHAPTER * CHAPTER_WEIGHT + MAX_VERSE);

    pub fn new(book: u32, chapter: u32, verse: u32) -> Result<Self, InvalidKeyError> {
        if book == 0 || book > MAX_BOOK {
            return Err(InvalidKeyError::Book(book));
        }
        if chapter > MAX_CHAPTER {
            return Err(InvalidKeyError::Chapter(chapter));
        }
        if verse > MAX_VERSE {
            return Err(InvalidKeyError::Verse(verse));
        }
        Ok(VerseKey(book * BOOK_WEIGHT + chapter * CHAPTER_WEIGHT + verse))
    }

    /// Rebuild a key from its packed integer, checking every component.
    pub fn from_u32(packed: u32) -> Result<Self, InvalidKeyError> {
        Self::new(
            packed / BOOK_WEIGHT,
            (packed % BOOK_WEIGHT) / CHAPTER_WEIGHT,
            packed % CHAPTER_WEIGHT,
        )
    }

    #[inline]
    pub fn book(self) -> u32 {
        self.0 / BOOK_WEIGHT
    }

    #[inline]
    pub fn chapter(self) -> u32 {
        (self.0 % BOOK_WEIGHT) / CHAPTER_WEIGHT
    }

    #[inline]
    pub fn verse(self) -> u32 {
        self.0 % CHAPTER_WEIGHT
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Human-readable form, e.g. `"01 3:5"`. Book codes are not named here;
    /// mapping codes to book titles belongs to the query side.
    pub fn human(self) -> String {
        format!("{:02} {}:{}", self.book(), self.chapter(), self.verse())
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = KEY_LENGTH)
    }
}

impl FromStr for VerseKey {
    type Err = InvalidKeyError;

    /// Parse the eight-digit `BBCCCVVV` form. Signs, spaces and shorter or
    /// longer digit runs are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != KEY_LENGTH || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidKeyError::Digits(s.to_string()));
        }
        let packed = s
            .parse::<u32>()
            .map_err(|_| InvalidKeyError::Digits(s.to_string()))?;
        Self::from_u32(packed)
    }
}

// =============================================================================
// RANGES
// =============================================================================

/// A closed interval `[start, end]` of scripture locations.
///
/// Ordered by `start`, then `end` (field order matters for the derive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    start: VerseKey,
    end: VerseKey,
}

impl Range {
    pub fn new(start: VerseKey, end: VerseKey) -> Result<Self, InvalidRangeError> {
        if start > end {
            return Err(InvalidRangeError { start, end });
        }
        let range = Range { start, end };
        check_range_well_formed(&range);
        Ok(range)
    }

    /// A single-location range (`start == end`).
    pub fn point(key: VerseKey) -> Self {
        Range { start: key, end: key }
    }

    #[inline]
    pub fn start(&self) -> VerseKey {
        self.start
    }

    #[inline]
    pub fn end(&self) -> VerseKey {
        self.end
    }

    /// True iff the two ranges share at least one location.
    #[inline]
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start.max(other.start) <= self.end.min(other.end)
    }

    /// Packed-key gap to a disjoint range, `None` when they overlap.
    ///
    /// `max(starts) - min(ends)`, which is strictly positive once the ranges
    /// are known to be disjoint.
    #[inline]
    pub fn gap(&self, other: &Range) -> Option<u32> {
        let lo = self.end.min(other.end);
        let hi = self.start.max(other.start);
        (hi > lo).then(|| hi.as_u32() - lo.as_u32())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

// =============================================================================
// RANGE SETS
// =============================================================================

/// The ranges a document (or query) is about.
///
/// Keeps insertion order; [`RangeSet::sorted`] gives the canonical order.
#[derive(Debug, Clone, Default, Eq)]
pub struct RangeSet(Vec<Range>);

impl RangeSet {
    pub fn new() -> Self {
        RangeSet(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, range: Range) {
        self.0.push(range);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Range] {
        &self.0
    }

    /// Ranges ordered by `(start, end)` with duplicates removed.
    pub fn sorted(&self) -> Vec<Range> {
        let mut ranges = self.0.clone();
        ranges.sort_unstable();
        ranges.dedup();
        ranges
    }
}

impl PartialEq for RangeSet {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl From<Vec<Range>> for RangeSet {
    fn from(ranges: Vec<Range>) -> Self {
        RangeSet(ranges)
    }
}

impl FromIterator<Range> for RangeSet {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        RangeSet(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A validated, non-empty query range set.
///
/// Built once per query and then shared read-only across every scoring call,
/// possibly from many threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRanges(RangeSet);

impl QueryRanges {
    pub fn new(ranges: RangeSet) -> Result<Self, EmptyQueryError> {
        if ranges.is_empty() {
            return Err(EmptyQueryError);
        }
        Ok(QueryRanges(ranges))
    }

    pub fn ranges(&self) -> &RangeSet {
        &self.0
    }
}

impl TryFrom<RangeSet> for QueryRanges {
    type Error = EmptyQueryError;

    fn try_from(ranges: RangeSet) -> Result<Self, Self::Error> {
        QueryRanges::new(ranges)
    }
}
