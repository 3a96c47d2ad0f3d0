// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the range and scoring invariants.
//!
//! Every check here is a `debug_assert!`: zero cost in release builds, loud
//! during tests. The constructors already enforce these properties, so a
//! contract firing means a bug inside this crate, not bad input.
//!
//! | Contract                  | Property                                   |
//! |---------------------------|--------------------------------------------|
//! | `check_range_well_formed` | `start <= end`                             |
//! | `check_sorted_by_start`   | sweep input ordered by `(start, end)`      |
//! | `check_gap_positive`      | disjoint ranges never measure distance 0   |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The packed key layout and the score sentinels are checked at build time.
const _: () = {
    use crate::config::{BOOK_WEIGHT, CHAPTER_WEIGHT, MAX_BOOK, MAX_CHAPTER, MAX_VERSE};
    use crate::scoring::{BEST_SCORE, NOT_RELEVANT};

    // Components never carry into the next slot.
    assert!(MAX_VERSE < CHAPTER_WEIGHT);
    assert!(MAX_CHAPTER * CHAPTER_WEIGHT + MAX_VERSE < BOOK_WEIGHT);

    // Largest key fits u32 with room to spare.
    assert!(MAX_BOOK as u64 * BOOK_WEIGHT as u64 + (BOOK_WEIGHT as u64) < u32::MAX as u64);

    // 1/d for d >= 1 lies in (0, 1], strictly between the sentinels.
    assert!(BEST_SCORE > 1.0);
    assert!(NOT_RELEVANT < 0.0);
};

use crate::types::Range;

// ============================================================================
// RANGE CONTRACTS
// ============================================================================

/// Check that a range is well-formed.
///
/// # Panics (debug builds only)
/// Panics if `start > end`.
#[inline]
pub fn check_range_well_formed(range: &Range) {
    debug_assert!(
        range.start() <= range.end(),
        "Contract violation: Range.WellFormed - start {} > end {}",
        range.start(),
        range.end()
    );
}

/// Check that ranges are sorted by `(start, end)`.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_sorted_by_start(ranges: &[Range]) {
    for (i, pair) in ranges.windows(2).enumerate() {
        debug_assert!(
            pair[0] <= pair[1],
            "Contract violation: ranges[{}] {} sorts after ranges[{}] {}",
            i,
            pair[0],
            i + 1,
            pair[1]
        );
    }
}

// ============================================================================
// DISTANCE CONTRACTS
// ============================================================================

/// Check that the measured gap between two disjoint ranges is positive.
///
/// A zero here would make a near miss indistinguishable from an overlap.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_gap_positive(gap: u32, a: &Range, b: &Range) {
    debug_assert!(
        gap > 0,
        "Contract violation: disjoint ranges {} and {} measured a zero gap",
        a,
        b
    );
}
