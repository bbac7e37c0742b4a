//! Inverted index accumulation.
//!
//! Maps each term to the ordered list of document ordinals containing
//! it. Documents are merged one at a time in ordinal order and each
//! document contributes a term at most once, so every posting list is
//! strictly increasing with no duplicates. The index is append-only
//! during a run; `add_document` is its only mutation path.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Term → ordered document-ordinal list.
///
/// Backed by a `BTreeMap` so the serialized artifact lists terms in a
/// stable order.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    postings: BTreeMap<String, Vec<u32>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one document's terms under its ordinal.
    ///
    /// Duplicate terms within the document collapse to a single
    /// posting: the index records containment, not frequency.
    pub fn add_document<I>(&mut self, ordinal: u32, terms: I)
    where
        I: IntoIterator<Item = String>,
    {
        let distinct: BTreeSet<String> = terms.into_iter().collect();
        for term in distinct {
            if term.is_empty() {
                continue;
            }
            let postings = self.postings.entry(term).or_default();
            debug_assert!(
                postings.last().map_or(true, |&last| last < ordinal),
                "ordinals must be merged in increasing order"
            );
            postings.push(ordinal);
        }
    }

    /// Posting list for a term, if indexed
    pub fn postings(&self, term: &str) -> Option<&[u32]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Number of distinct terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Iterate terms and posting lists in term order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.postings
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }
}
