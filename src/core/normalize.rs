//! Text normalization ahead of tokenization.
//!
//! Lowercases the extracted buffer, blanks punctuation, removes
//! stopwords with whole-word matching, and collapses whitespace, in
//! that order. Punctuation blanking runs a second time after stopword
//! removal because removing a word can expose adjacent punctuation.
//! The result is split on whitespace into surface tokens for the term
//! pipeline.

use crate::core::error::{DocdexError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Default English stopword list
const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "to", "and", "or", "is", "are", "in", "with", "be", "can", "each", "has",
    "have", "of", "not", "for", "this", "as", "it", "he", "she", "you", "by", "so", "on", "your",
    "at", "i", "me", "my",
];

/// Default punctuation classes: common Latin punctuation and symbols,
/// CJK punctuation, and full-width forms. All are blanked to spaces.
const DEFAULT_PUNCTUATION: &str = concat!(
    "[",
    r"\x21-\x2F\x3A-\x40\x5B-\x60\x7B-\x7E",  // ASCII punctuation
    r"\xA1-\xBF\xD7\xF7",                     // Latin-1 punctuation, ©, ®, ×, ÷
    r"\x{2010}-\x{2027}\x{2030}-\x{205E}",    // general punctuation, quotes, dashes
    r"\x{20AC}",                              // euro sign
    r"\x{3001}-\x{3003}\x{3008}-\x{3011}\x{3014}-\x{301F}\x{30FB}", // CJK punctuation
    r"\x{FF01}-\x{FF0F}\x{FF1A}-\x{FF20}\x{FF3B}-\x{FF40}\x{FF5B}-\x{FF65}", // full-width forms
    r"\x{FFE0}-\x{FFE6}",                     // full-width signs
    "]",
);

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse runs of whitespace to single spaces. Idempotent.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

/// Compiled cleanup configuration, built once per indexing run and
/// shared across all documents.
#[derive(Debug)]
pub struct Normalizer {
    stopwords: Regex,
    punctuation: Regex,
}

impl Normalizer {
    /// Build a normalizer. Empty override lists select the defaults;
    /// caller-supplied entries are matched literally (regex
    /// metacharacters are escaped).
    pub fn new(stopwords: &[String], punctuation: &[String]) -> Result<Self> {
        let stopword_pattern = if stopwords.is_empty() {
            build_word_pattern(DEFAULT_STOPWORDS.iter().copied())
        } else {
            // The single-letter article stays filtered even under a
            // custom list
            build_word_pattern(
                std::iter::once("a").chain(stopwords.iter().map(String::as_str)),
            )
        };
        let punctuation_pattern = if punctuation.is_empty() {
            DEFAULT_PUNCTUATION.to_string()
        } else {
            // Ideographic full stop stays blanked under a custom set
            let alternates: Vec<String> = std::iter::once("\u{3002}".to_string())
                .chain(punctuation.iter().map(|p| regex::escape(p)))
                .collect();
            format!("(?:{})", alternates.join("|"))
        };

        Ok(Self {
            stopwords: compile(&stopword_pattern)?,
            punctuation: compile(&punctuation_pattern)?,
        })
    }

    /// Run the full cleanup over an entity-decoded buffer.
    ///
    /// Order is significant: stopword matching assumes punctuation is
    /// already blanked, and the trailing punctuation pass guarantees
    /// the buffer ends up as alphanumeric runs and spaces only.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let mut buf = collapse_whitespace(&lowered);
        buf = buf.replace("->", " ");
        buf = self.punctuation.replace_all(&buf, " ").into_owned();
        buf = self.stopwords.replace_all(&buf, " ").into_owned();
        buf = self.punctuation.replace_all(&buf, " ").into_owned();
        buf
    }

    /// Normalize and split into the ordered surface token sequence
    pub fn surface_tokens(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

/// `\b`-anchored alternation over literal words
fn build_word_pattern<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let alternates: Vec<String> = words
        .map(|w| regex::escape(&w.to_lowercase()))
        .collect();
    format!(r"\b(?:{})\b", alternates.join("|"))
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| DocdexError::ConfigError(format!("Invalid cleanup pattern: {e}")))
}
