// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! From distance to a number the search engine can sort on.
//!
//! Larger is better and the engine sorts descending. Overlap gets the best
//! possible score, a near miss gets `1 / distance`, a document with no ranges
//! gets the worst possible score.
//!
//! # Sentinels
//!
//! | Outcome        | Score            | Why this value                        |
//! |----------------|------------------|---------------------------------------|
//! | Overlap        | `+∞`             | Beats every finite `1/d`              |
//! | Gap `d >= 1`   | `1/d` in `(0,1]` | Smaller gaps score strictly higher    |
//! | No ranges      | `-∞`             | Loses to every document with ranges   |
//!
//! Scores are `f64`. At verse resolution a gap can reach 98 999 999 key
//! units, and neighbouring reciprocals that far out collapse in `f32`.
//!
//! A malformed stored field is an error, never a score. Quietly scoring it as
//! "not relevant" would hide an indexing bug behind a plausible ranking.

use tracing::{debug, trace};

use crate::codec::RangeCodec;
use crate::config::ScoringConfig;
use crate::error::{ConfigError, MalformedFieldError, ScoreError};
use crate::scoring::distance::{range_distance, DistanceUnit, Proximity};
use crate::source::FieldSource;
use crate::types::{DocId, QueryRanges};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Score for a document whose ranges overlap the query.
pub const BEST_SCORE: f64 = f64::INFINITY;

/// Score for a document with no ranges.
pub const NOT_RELEVANT: f64 = f64::NEG_INFINITY;

/// Map a proximity onto the engine's score scale.
#[inline]
pub fn score_from_proximity(proximity: Proximity) -> f64 {
    match proximity {
        Proximity::Overlapping => BEST_SCORE,
        Proximity::Gap(d) => 1.0 / d.get() as f64,
        Proximity::Unrelated => NOT_RELEVANT,
    }
}

/// Scores documents against one query.
///
/// Holds only shared references, so one scorer (or many) can run on as many
/// threads as the host likes. Nothing is cached between calls.
pub struct RangeScorer<'a, S: FieldSource + ?Sized> {
    query: &'a QueryRanges,
    source: &'a S,
    codec: RangeCodec,
    unit: DistanceUnit,
}

impl<'a, S: FieldSource + ?Sized> RangeScorer<'a, S> {
    /// Build a scorer from a validated config.
    pub fn new(
        query: &'a QueryRanges,
        source: &'a S,
        config: &ScoringConfig,
    ) -> Result<Self, ConfigError> {
        let codec = config.validate()?;
        Ok(Self::with_codec(query, source, codec, config.distance_unit))
    }

    pub fn with_codec(
        query: &'a QueryRanges,
        source: &'a S,
        codec: RangeCodec,
        unit: DistanceUnit,
    ) -> Self {
        RangeScorer {
            query,
            source,
            codec,
            unit,
        }
    }

    /// Proximity of one stored field; `None` when the field is absent.
    pub fn field_proximity(
        &self,
        field: Option<&str>,
    ) -> Result<Option<Proximity>, MalformedFieldError> {
        let Some(text) = field else {
            return Ok(None);
        };
        let ranges = self.codec.decode(text)?;
        Ok(Some(range_distance(self.query.ranges(), &ranges, self.unit)))
    }

    /// Score one stored field directly, without going through the source.
    pub fn score_field(&self, field: Option<&str>) -> Result<f64, MalformedFieldError> {
        Ok(self
            .field_proximity(field)?
            .map_or(NOT_RELEVANT, score_from_proximity))
    }

    /// Proximity of one document; `None` when it has no range field.
    pub fn proximity(&self, doc: DocId) -> Result<Option<Proximity>, ScoreError> {
        let field = self.source.range_field(doc);
        let proximity = self.field_proximity(field.as_deref()).map_err(|source| {
            debug!(doc = %doc, error = %source, "stored range field failed to decode");
            ScoreError::Malformed { doc, source }
        })?;
        trace!(doc = %doc, ?proximity, "scored document");
        Ok(proximity)
    }

    /// Score one document.
    pub fn score(&self, doc: DocId) -> Result<f64, ScoreError> {
        Ok(self.proximity(doc)?.map_or(NOT_RELEVANT, score_from_proximity))
    }
}
