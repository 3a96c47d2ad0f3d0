// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stored field format for range sets.
//!
//! A document's ranges live in one text field: `start-end` pairs of
//! eight-digit location keys, separated by commas.
//!
//! ```text
//! 01001001-01003005,40005001-40007029
//! └──────┘ └──────┘
//!  start     end      (BBCCCVVV, sorts as text and as integer)
//! ```
//!
//! Both separators are deployment choices and can be swapped, as long as the
//! writer and the scorer agree. Decoding is strict: one bad entry fails the
//! whole field, so a corrupt document is never scored on half its ranges.

use crate::config::{DEFAULT_BOUND_SEPARATOR, DEFAULT_RANGE_SEPARATOR};
use crate::contracts::check_sorted_by_start;
use crate::error::{ConfigError, FieldErrorReason, MalformedFieldError};
use crate::types::{Range, RangeSet, VerseKey};

/// Encoder/decoder for the stored range field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeCodec {
    range_separator: char,
    bound_separator: char,
}

impl Default for RangeCodec {
    fn default() -> Self {
        RangeCodec {
            range_separator: DEFAULT_RANGE_SEPARATOR,
            bound_separator: DEFAULT_BOUND_SEPARATOR,
        }
    }
}

impl RangeCodec {
    /// Codec with a custom alphabet.
    ///
    /// Separators must differ and may not be digits or whitespace, otherwise
    /// the format would be ambiguous.
    pub fn with_separators(range_separator: char, bound_separator: char) -> Result<Self, ConfigError> {
        for sep in [range_separator, bound_separator] {
            if sep.is_ascii_digit() || sep.is_whitespace() {
                return Err(ConfigError::InvalidSeparator(sep));
            }
        }
        if range_separator == bound_separator {
            return Err(ConfigError::SameSeparators(range_separator));
        }
        Ok(RangeCodec {
            range_separator,
            bound_separator,
        })
    }

    pub fn range_separator(&self) -> char {
        self.range_separator
    }

    pub fn bound_separator(&self) -> char {
        self.bound_separator
    }

    /// Decode a stored field.
    ///
    /// Empty or whitespace-only text is the empty set. Telling an absent field
    /// apart from an empty one is the scorer's job.
    pub fn decode(&self, text: &str) -> Result<RangeSet, MalformedFieldError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(RangeSet::new());
        }

        text.split(self.range_separator)
            .enumerate()
            .map(|(entry, raw)| {
                let raw = raw.trim();
                self.decode_range(raw).map_err(|reason| MalformedFieldError {
                    entry,
                    text: raw.to_string(),
                    reason,
                })
            })
            .collect()
    }

    fn decode_range(&self, raw: &str) -> Result<Range, FieldErrorReason> {
        if raw.is_empty() {
            return Err(FieldErrorReason::EmptyEntry);
        }

        let mut bounds = raw.split(self.bound_separator);
        let (Some(start), Some(end), None) = (bounds.next(), bounds.next(), bounds.next()) else {
            return Err(FieldErrorReason::MissingBound(self.bound_separator));
        };

        let start: VerseKey = start.trim().parse()?;
        let end: VerseKey = end.trim().parse()?;
        Range::new(start, end).map_err(FieldErrorReason::from)
    }

    /// Encode a range set in canonical form: sorted by `(start, end)`,
    /// duplicates removed.
    pub fn encode(&self, ranges: &RangeSet) -> String {
        let sorted = ranges.sorted();
        check_sorted_by_start(&sorted);

        let mut out = String::with_capacity(sorted.len() * 18);
        for (i, range) in sorted.iter().enumerate() {
            if i > 0 {
                out.push(self.range_separator);
            }
            out.push_str(&range.start().to_string());
            out.push(self.bound_separator);
            out.push_str(&range.end().to_string());
        }
        out
    }
}
