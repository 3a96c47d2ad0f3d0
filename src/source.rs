// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only access to a document's stored range field.
//!
//! The scorer never holds on to an index segment. The host engine hands it
//! something that implements [`FieldSource`], and the scorer asks for one
//! document's field at a time. `None` means the document has no range field
//! at all, which is different from an empty one only in spirit: both score
//! as not relevant.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::types::DocId;

/// Given a document id, return its stored range-field text.
pub trait FieldSource {
    fn range_field(&self, doc: DocId) -> Option<Cow<'_, str>>;
}

impl<S: FieldSource + ?Sized> FieldSource for &S {
    fn range_field(&self, doc: DocId) -> Option<Cow<'_, str>> {
        (**self).range_field(doc)
    }
}

impl FieldSource for HashMap<DocId, String> {
    fn range_field(&self, doc: DocId) -> Option<Cow<'_, str>> {
        self.get(&doc).map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl FieldSource for BTreeMap<DocId, String> {
    fn range_field(&self, doc: DocId) -> Option<Cow<'_, str>> {
        self.get(&doc).map(|s| Cow::Borrowed(s.as_str()))
    }
}

/// Dense storage indexed by doc id; out-of-bounds ids have no field.
impl FieldSource for [Option<String>] {
    fn range_field(&self, doc: DocId) -> Option<Cow<'_, str>> {
        self.get(doc.as_usize())
            .and_then(Option::as_deref)
            .map(Cow::Borrowed)
    }
}

impl FieldSource for Vec<Option<String>> {
    fn range_field(&self, doc: DocId) -> Option<Cow<'_, str>> {
        self.as_slice().range_field(doc)
    }
}

/// Adapter for hosts that materialize stored fields on demand
/// (decompressing a stored-fields block, for example).
pub struct FnSource<F>(pub F);

impl<F> FieldSource for FnSource<F>
where
    F: Fn(DocId) -> Option<String>,
{
    fn range_field(&self, doc: DocId) -> Option<Cow<'_, str>> {
        (self.0)(doc).map(Cow::Owned)
    }
}
