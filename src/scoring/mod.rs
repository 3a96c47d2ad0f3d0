// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how documents get their numbers.
//!
//! Overlap dominates everything else. A document touching the query anywhere
//! beats every document that merely comes close, and among near misses the
//! smaller gap wins. Documents with no ranges sink to the bottom.

mod core;
pub mod distance;
pub mod ranking;

pub use self::core::*;
pub use distance::{range_distance, range_distance_pairwise, DistanceUnit, Proximity};
pub use ranking::{compare_scored, ScoredDoc};
