// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch scoring and result ordering.
//!
//! The host engine normally drives scoring one document at a time, but tools
//! and tests want "score these candidates and give me the best N". Scores are
//! independent per document, so with the `parallel` feature the batch fans out
//! over rayon with no locking at all.
//!
//! Sort order:
//! 1. **Score** - descending, `+∞` first and `-∞` last
//! 2. **Doc ID** - ascending, so equal scores come out in a stable order

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::ScoreError;
use crate::scoring::core::{score_from_proximity, RangeScorer, NOT_RELEVANT};
use crate::scoring::distance::Proximity;
use crate::source::FieldSource;
use crate::types::DocId;

/// One scored candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDoc {
    pub doc: DocId,
    pub score: f64,
    /// `None` when the document has no range field.
    pub proximity: Option<Proximity>,
}

impl ScoredDoc {
    fn new(doc: DocId, proximity: Option<Proximity>) -> Self {
        ScoredDoc {
            doc,
            score: proximity.map_or(NOT_RELEVANT, score_from_proximity),
            proximity,
        }
    }
}

/// Compare two scored documents for ranking (best first).
pub fn compare_scored(a: &ScoredDoc, b: &ScoredDoc) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.doc.cmp(&b.doc))
}

impl<S: FieldSource + Sync + ?Sized> RangeScorer<'_, S> {
    /// Score every document, preserving input order.
    ///
    /// Fails on the first malformed document. Which one is "first" is not
    /// defined when running in parallel.
    pub fn score_all(&self, docs: &[DocId]) -> Result<Vec<ScoredDoc>, ScoreError> {
        debug!(docs = docs.len(), "scoring batch");

        #[cfg(feature = "parallel")]
        let iter = docs.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = docs.iter();

        iter.map(|&doc| self.proximity(doc).map(|p| ScoredDoc::new(doc, p)))
            .collect()
    }

    /// Score every document and return the best `limit`, best first.
    pub fn rank(&self, docs: &[DocId], limit: usize) -> Result<Vec<ScoredDoc>, ScoreError> {
        let mut scored = self.score_all(docs)?;

        #[cfg(feature = "parallel")]
        scored.par_sort_unstable_by(compare_scored);
        #[cfg(not(feature = "parallel"))]
        scored.sort_unstable_by(compare_scored);

        scored.truncate(limit);
        Ok(scored)
    }
}
