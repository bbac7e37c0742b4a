//! Core data types for the docdex indexer.
//!
//! Everything that outlives a single document lives here: the
//! per-document descriptor, run statistics, and the bundled result of
//! an indexing run. Transient per-document values (raw bytes, decoded
//! markup, extraction state) stay local to the modules that produce
//! them.

use crate::core::index::InvertedIndex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-document metadata collected during extraction.
///
/// The ordinal is assigned at intake, starts at 0, increases by one
/// per document and is never reused. It is the document's identity
/// in the inverted index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Zero-based position of this document in processing order
    pub ordinal: u32,

    /// Source file path
    pub path: PathBuf,

    /// Document title, taken from the `<title>` element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short description, taken from `<meta name="description">`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_desc: Option<String>,
}

impl DocumentRecord {
    /// Create an empty record for a document at the given ordinal
    pub fn new(ordinal: u32, path: impl Into<PathBuf>) -> Self {
        Self {
            ordinal,
            path: path.into(),
            title: None,
            short_desc: None,
        }
    }
}

/// Statistics from an indexing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of documents fully processed
    pub documents_indexed: usize,

    /// Number of documents that contributed empty text (read or
    /// decode failure)
    pub documents_failed: usize,

    /// Number of distinct terms in the final index
    pub distinct_terms: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}

/// The complete result of one indexing run
#[derive(Debug)]
pub struct IndexRun {
    /// One record per processed document, in ordinal order
    pub documents: Vec<DocumentRecord>,

    /// Accumulated term → ordinal-list map
    pub index: InvertedIndex,

    /// Run statistics
    pub stats: RunStats,
}
