// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring configuration and the constants behind it.
//!
//! The compile-time constants describe the location key layout and the
//! default field alphabet. `ScoringConfig` is the runtime side: a small JSON
//! document, every field optional, that says which stored field holds the
//! ranges, how that field is delimited and what unit distances are measured in.
//!
//! ```json
//! {
//!   "field": "bible_ranges",
//!   "rangeSeparator": ",",
//!   "boundSeparator": "-",
//!   "distanceUnit": "chapter"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::RangeCodec;
use crate::error::ConfigError;
use crate::scoring::DistanceUnit;

// =============================================================================
// KEY LAYOUT
// =============================================================================

/// Digits used for the book code.
pub const BOOK_CODE_LENGTH: usize = 2;

/// Digits used for the chapter number.
pub const MAX_CHAPTER_LENGTH: usize = 3;

/// Digits used for the verse number.
pub const MAX_VERSE_LENGTH: usize = 3;

/// Total digits in a textual location key (`BBCCCVVV`).
pub const KEY_LENGTH: usize = BOOK_CODE_LENGTH + MAX_CHAPTER_LENGTH + MAX_VERSE_LENGTH;

pub const MAX_BOOK: u32 = 99;
pub const MAX_CHAPTER: u32 = 999;
pub const MAX_VERSE: u32 = 999;

/// Packed-key weight of one chapter step.
pub const CHAPTER_WEIGHT: u32 = 1_000;

/// Packed-key weight of one book step.
pub const BOOK_WEIGHT: u32 = 1_000_000;

// =============================================================================
// FIELD DEFAULTS
// =============================================================================

/// Stored field holding a document's ranges.
pub const DEFAULT_FIELD: &str = "bible_ranges";

/// Separates ranges within a field.
pub const DEFAULT_RANGE_SEPARATOR: char = ',';

/// Separates the start and end key of one range.
pub const DEFAULT_BOUND_SEPARATOR: char = '-';

/// Runtime scoring configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Name of the stored field holding the encoded ranges.
    pub field: String,
    pub range_separator: char,
    pub bound_separator: char,
    pub distance_unit: DistanceUnit,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD.to_string(),
            range_separator: DEFAULT_RANGE_SEPARATOR,
            bound_separator: DEFAULT_BOUND_SEPARATOR,
            distance_unit: DistanceUnit::default(),
        }
    }
}

impl ScoringConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Check the field name and separators, returning the codec they describe.
    pub fn validate(&self) -> Result<RangeCodec, ConfigError> {
        if self.field.trim().is_empty() {
            return Err(ConfigError::EmptyFieldName);
        }
        RangeCodec::with_separators(self.range_separator, self.bound_separator)
    }
}
