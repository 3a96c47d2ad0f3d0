// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scripture-reference proximity scoring.
//!
//! Documents are annotated with the scripture ranges they discuss, queries
//! ask for scripture ranges, and this crate says how close the two are so a
//! search engine can rank by biblical-reference proximity instead of term
//! overlap.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  types.rs   │────▶│  codec.rs    │────▶│ scoring/core.rs  │
//! │ (VerseKey,  │     │ (RangeCodec) │     │  (RangeScorer)   │
//! │ Range, Set) │     └──────────────┘     └──────────────────┘
//! └─────────────┘                                  ▲
//!        │            ┌──────────────────────┐     │
//!        └───────────▶│ scoring/distance.rs  │─────┘
//!                     │ (range_distance)     │
//!                     └──────────────────────┘
//! ```
//!
//! The host engine parses the query once into [`QueryRanges`], then for each
//! candidate document hands the scorer a [`FieldSource`] lookup. The scorer
//! decodes the stored field, measures the distance and returns a score.
//! Every step is pure, so scoring can run on as many threads as there are
//! candidates.
//!
//! # Usage
//!
//! ```
//! use bible_ranges::{
//!     DocId, QueryRanges, Range, RangeScorer, RangeSet, ScoringConfig, VerseKey, BEST_SCORE,
//! };
//!
//! let start = VerseKey::new(1, 1, 1)?;
//! let end = VerseKey::new(1, 3, 5)?;
//! let query = QueryRanges::new(RangeSet::from(vec![Range::new(start, end)?]))?;
//!
//! let fields = vec![Some("01002001-01002010".to_string())];
//! let scorer = RangeScorer::new(&query, &fields, &ScoringConfig::default())?;
//! assert_eq!(scorer.score(DocId(0))?, BEST_SCORE);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod config;
pub mod contracts;
pub mod error;
pub mod scoring;
pub mod source;
pub mod testing;
mod types;

// Re-exports for public API
pub use codec::RangeCodec;
pub use config::ScoringConfig;
pub use error::{
    ConfigError, EmptyQueryError, FieldErrorReason, InvalidKeyError, InvalidRangeError,
    MalformedFieldError, ScoreError,
};
pub use scoring::{
    compare_scored, range_distance, range_distance_pairwise, score_from_proximity,
    DistanceUnit, Proximity, RangeScorer, ScoredDoc, BEST_SCORE, NOT_RELEVANT,
};
pub use source::{FieldSource, FnSource};
pub use types::{DocId, QueryRanges, Range, RangeSet, VerseKey};
