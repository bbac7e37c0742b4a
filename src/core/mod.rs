//! Core domain logic (interface-agnostic)
//!
//! Everything the indexer does that is independent of how it is
//! invoked:
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **encoding**: Charset resolution and decoding
//! - **extract**: Streaming markup text extraction
//! - **normalize**: Stopword and punctuation cleanup
//! - **terms**: Language-keyed stemming/segmentation
//! - **index**: Inverted index accumulation
//! - **indexer**: File discovery and pipeline orchestration
//! - **persist**: JSON artifact output

pub mod config;
pub mod encoding;
pub mod error;
pub mod extract;
pub mod index;
pub mod indexer;
pub mod normalize;
pub mod persist;
pub mod terms;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocdexError, Result};
pub use index::InvertedIndex;
pub use indexer::IndexingPipeline;
