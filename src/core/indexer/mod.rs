//! Document discovery and run orchestration.
//!
//! - **walker**: (X)HTML file discovery with glob filtering
//! - **pipeline**: per-document processing and index accumulation

pub mod pipeline;
pub mod walker;

pub use pipeline::IndexingPipeline;
pub use walker::DocWalker;
