//! Markup text extraction.
//!
//! - **scanner**: streaming start/end tag events over decoded markup
//! - **text**: content-region scoping, exclusion classes, title and
//!   description capture
//! - **entities**: character reference decoding

pub mod entities;
pub mod scanner;
pub mod text;

pub use entities::{decode_entities, EntityTable};
pub use scanner::{TagEvent, TagScanner};
pub use text::{extract, ExtractedDoc};
