// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for range construction, field decoding and scoring.
//!
//! None of these are recovered from inside the crate. A stored field that
//! does not decode is an indexing bug, and the caller gets to decide whether
//! to skip the document, log it, or abort the query.

use thiserror::Error;

use crate::types::{DocId, VerseKey};

/// A range whose start sorts after its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("range start {start} is after end {end}")]
pub struct InvalidRangeError {
    pub start: VerseKey,
    pub end: VerseKey,
}

/// A location key that cannot be packed into `BBCCCVVV`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidKeyError {
    #[error("book {0} is outside 1..=99")]
    Book(u32),
    #[error("chapter {0} is outside 0..=999")]
    Chapter(u32),
    #[error("verse {0} is outside 0..=999")]
    Verse(u32),
    #[error("expected 8 digits, got {0:?}")]
    Digits(String),
}

/// Why a single entry of a stored range field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorReason {
    #[error("empty entry")]
    EmptyEntry,
    #[error("expected exactly one '{0}' between start and end")]
    MissingBound(char),
    #[error(transparent)]
    Key(#[from] InvalidKeyError),
    #[error(transparent)]
    Range(#[from] InvalidRangeError),
}

/// A stored range field that does not decode into a well-formed range set.
///
/// Decoding is all-or-nothing: one bad entry rejects the whole field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed range field at entry {entry} ({text:?}): {reason}")]
pub struct MalformedFieldError {
    /// Zero-based position of the entry within the field.
    pub entry: usize,
    /// The offending entry, trimmed.
    pub text: String,
    pub reason: FieldErrorReason,
}

/// A query with no ranges in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("query must contain at least one range")]
pub struct EmptyQueryError;

/// Invalid codec alphabet or an unreadable configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("range and bound separators must differ (both are {0:?})")]
    SameSeparators(char),
    #[error("separator {0:?} may not be a digit or whitespace")]
    InvalidSeparator(char),
    #[error("field name may not be empty")]
    EmptyFieldName,
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Scoring a document failed because its stored field is corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("document {doc}: {source}")]
    Malformed {
        doc: DocId,
        #[source]
        source: MalformedFieldError,
    },
}

impl ScoreError {
    /// The document whose field failed to decode.
    pub fn doc(&self) -> DocId {
        match self {
            ScoreError::Malformed { doc, .. } => *doc,
        }
    }
}
