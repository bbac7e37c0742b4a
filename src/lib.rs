//! docdex - Full-Text Search Indexer for Documentation Sites
//!
//! Extracts indexable text and metadata from the (X)HTML output of a
//! documentation-publishing pipeline and accumulates a
//! term-to-document inverted index, written out as a JSON artifact
//! for a site's search frontend.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (interface-agnostic)
//!   - config, error, types
//!   - encoding (charset resolution and decoding)
//!   - extract (streaming tag scan, entity decoding)
//!   - normalize, terms (cleanup and stemming/segmentation)
//!   - index (inverted index accumulation)
//!   - indexer (file discovery, pipeline orchestration)
//!   - persist (JSON artifact output)
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Key Properties
//!
//! - Streaming extraction: one forward pass per document, no DOM
//! - Batch tolerant: a malformed or unreadable document degrades to
//!   empty text and the run continues
//! - Deterministic: sorted intake order, stable ordinals, ordered
//!   posting lists

// Core domain logic (interface-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocdexError, Result};
pub use core::index::InvertedIndex;
pub use core::indexer::IndexingPipeline;
pub use core::types::{DocumentRecord, IndexRun, RunStats};
