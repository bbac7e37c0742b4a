//! Indexing pipeline orchestration.
//!
//! Coordinates the end-to-end indexing workflow:
//! 1. Walk the documentation tree
//! 2. Per document, in ordinal order: read bytes, resolve encoding
//!    and decode, extract text and metadata, decode entities,
//!    normalize, run the term pipeline
//! 3. Merge each document's distinct terms into the inverted index
//!
//! The run is strictly single-threaded: one document is fully
//! processed and merged before the next begins, which is what keeps
//! every posting list ordered. A document that cannot be read
//! contributes an empty record and the run continues.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::config::Config;
use crate::core::encoding::decode_document;
use crate::core::error::Result;
use crate::core::extract::{decode_entities, extract, EntityTable};
use crate::core::index::InvertedIndex;
use crate::core::indexer::DocWalker;
use crate::core::normalize::Normalizer;
use crate::core::terms::TermPipeline;
use crate::core::types::{DocumentRecord, IndexRun, RunStats};

/// Orchestrates the indexing pipeline
pub struct IndexingPipeline {
    walker: DocWalker,
    normalizer: Normalizer,
    entities: EntityTable,
    terms: TermPipeline,
    file_encoding: Option<String>,
}

impl IndexingPipeline {
    /// Build a pipeline from run configuration. The cleanup
    /// configuration is compiled once here and shared by every
    /// document in the run.
    pub fn from_config(config: &Config) -> Result<Self> {
        let walker = DocWalker::new(
            &config.indexing.include_patterns,
            &config.indexing.exclude_patterns,
            config.indexing.max_file_size_mb,
        )?;
        let normalizer = Normalizer::new(&config.cleanup.stopwords, &config.cleanup.punctuation)?;
        let entities = EntityTable::with_overrides(&config.extraction.symbol_entities);
        let terms = TermPipeline::for_language(&config.indexing.language);

        Ok(Self {
            walker,
            normalizer,
            entities,
            terms,
            file_encoding: config.extraction.file_encoding.clone(),
        })
    }

    /// Index a documentation tree and return records, index and
    /// statistics.
    ///
    /// Ordinals are assigned in sorted-path order at intake. Errors
    /// on individual documents are logged but don't stop the run.
    pub fn index_directory(&self, root: &Path) -> Result<IndexRun> {
        let start = Instant::now();

        tracing::info!("Collecting documents from {:?}", root);
        let files = self.walker.collect_files(root)?;
        tracing::info!("Found {} documents to index", files.len());

        let mut documents = Vec::with_capacity(files.len());
        let mut index = InvertedIndex::new();
        let mut documents_failed = 0;

        for (idx, path) in files.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!("Progress: {}/{} documents processed", idx, files.len());
            }

            let ordinal = idx as u32;
            let processed = self.process_document(path, ordinal, &mut index);
            if processed.failed {
                documents_failed += 1;
            }
            documents.push(processed.record);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Indexing complete: {} documents, {} failed, {} distinct terms in {}ms",
            documents.len(),
            documents_failed,
            index.term_count(),
            duration_ms
        );

        let stats = RunStats {
            documents_indexed: documents.len() - documents_failed,
            documents_failed,
            distinct_terms: index.term_count(),
            duration_ms,
        };

        Ok(IndexRun {
            documents,
            index,
            stats,
        })
    }

    /// Process a single document and merge its terms.
    ///
    /// Never fails: an unreadable file yields an empty-metadata
    /// record that contributes nothing to the index.
    fn process_document(
        &self,
        path: &Path,
        ordinal: u32,
        index: &mut InvertedIndex,
    ) -> ProcessedDocument {
        let mut record = DocumentRecord::new(ordinal, path);

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Cannot read {:?}: {}", path, e);
                return ProcessedDocument {
                    record,
                    failed: true,
                };
            }
        };

        let markup = decode_document(&bytes, self.file_encoding.as_deref());
        let extracted = extract(&markup);
        record.title = extracted.title;
        record.short_desc = extracted.short_desc;

        let text = decode_entities(&extracted.text, &self.entities);
        let tokens = self.normalizer.surface_tokens(&text);
        let terms = self.terms.run(tokens);
        index.add_document(ordinal, terms);

        tracing::debug!("Indexed {:?} as ordinal {}", path, ordinal);
        ProcessedDocument {
            record,
            failed: false,
        }
    }
}

struct ProcessedDocument {
    record: DocumentRecord,
    failed: bool,
}
