//! Index artifact persistence.
//!
//! Serializes the result of an indexing run as a single JSON file for
//! the documentation site's search frontend. The artifact is
//! regenerated wholesale on every run; how the frontend loads it is
//! its own concern.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::error::{DocdexError, Result};
use crate::core::index::InvertedIndex;
use crate::core::types::{DocumentRecord, IndexRun};

/// On-disk artifact shape
#[derive(Serialize)]
struct IndexArtifact<'a> {
    generated_at: DateTime<Utc>,
    language: &'a str,
    document_count: usize,
    documents: &'a [DocumentRecord],
    terms: &'a InvertedIndex,
}

/// Write the run result to `path` as pretty-printed JSON.
///
/// Parent directories are created as needed.
pub fn write_artifact(path: &Path, run: &IndexRun, language: &str) -> Result<()> {
    let artifact = IndexArtifact {
        generated_at: Utc::now(),
        language,
        document_count: run.documents.len(),
        documents: &run.documents,
        terms: &run.index,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                DocdexError::PersistFailed(format!(
                    "Cannot create {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let json = serde_json::to_string_pretty(&artifact)?;
    fs::write(path, json)
        .map_err(|e| DocdexError::PersistFailed(format!("Cannot write {}: {e}", path.display())))?;

    tracing::info!(
        "Wrote index artifact: {} ({} documents, {} terms)",
        path.display(),
        run.documents.len(),
        run.index.term_count()
    );
    Ok(())
}
