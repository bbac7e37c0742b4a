//! Language-keyed term pipeline.
//!
//! Turns normalized surface tokens into index terms. The capability
//! is selected once per run from the two-letter language code:
//!
//! - `ja` / `zh` / `ko`: overlapping bigram segmentation of CJK
//!   character runs (non-CJK runs pass through as whole words)
//! - `en` / `de` / `fr`: Snowball stem reduction
//! - anything else: passthrough
//!
//! Segmentation that produces nothing for a token falls back to the
//! unsegmented token, so a document is never lost to the pipeline.

use rust_stemmers::{Algorithm, Stemmer};

/// Languages with a stemming capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemLanguage {
    English,
    German,
    French,
}

impl StemLanguage {
    fn algorithm(self) -> Algorithm {
        match self {
            StemLanguage::English => Algorithm::English,
            StemLanguage::German => Algorithm::German,
            StemLanguage::French => Algorithm::French,
        }
    }
}

/// Term pipeline capability, dispatched once per document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermPipeline {
    /// Tokens pass through unchanged
    Passthrough,
    /// Snowball stem reduction
    Stem(StemLanguage),
    /// Overlapping CJK bigrams
    CjkBigrams,
}

impl TermPipeline {
    /// Select the capability for a language code (case-insensitive)
    pub fn for_language(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "ja" | "zh" | "ko" => TermPipeline::CjkBigrams,
            "en" => TermPipeline::Stem(StemLanguage::English),
            "de" => TermPipeline::Stem(StemLanguage::German),
            "fr" => TermPipeline::Stem(StemLanguage::French),
            other => {
                tracing::debug!("No stemmer for language '{}'; tokens pass through", other);
                TermPipeline::Passthrough
            }
        }
    }

    /// Map surface tokens to terms
    pub fn run(&self, tokens: Vec<String>) -> Vec<String> {
        match self {
            TermPipeline::Passthrough => tokens,
            TermPipeline::Stem(language) => {
                let stemmer = Stemmer::create(language.algorithm());
                tokens
                    .iter()
                    .map(|t| stemmer.stem(t).into_owned())
                    .collect()
            }
            TermPipeline::CjkBigrams => {
                let mut terms = Vec::with_capacity(tokens.len());
                for token in &tokens {
                    let before = terms.len();
                    segment_token(token, &mut terms);
                    if terms.len() == before && !token.is_empty() {
                        // Fall back to the unsegmented token
                        terms.push(token.clone());
                    }
                }
                terms
            }
        }
    }
}

/// Split one token into CJK bigrams and intervening non-CJK words
fn segment_token(token: &str, out: &mut Vec<String>) {
    let mut word = String::new();
    let mut run: Vec<char> = Vec::new();

    for c in token.chars() {
        if is_cjk(c) {
            if !word.is_empty() {
                out.push(std::mem::take(&mut word));
            }
            run.push(c);
        } else {
            flush_cjk_run(&mut run, out);
            word.push(c);
        }
    }
    flush_cjk_run(&mut run, out);
    if !word.is_empty() {
        out.push(word);
    }
}

/// Emit overlapping bigrams for a CJK run; a lone character is
/// emitted as-is
fn flush_cjk_run(run: &mut Vec<char>, out: &mut Vec<String>) {
    match run.len() {
        0 => {}
        1 => out.push(run[0].to_string()),
        _ => {
            for pair in run.windows(2) {
                out.push(pair.iter().collect());
            }
        }
    }
    run.clear();
}

/// CJK scripts that bigram segmentation applies to: Han ideographs,
/// kana, and hangul
fn is_cjk(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x11FF      // hangul jamo
        | 0x3040..=0x30FF    // hiragana, katakana
        | 0x3400..=0x4DBF    // CJK extension A
        | 0x4E00..=0x9FFF    // CJK unified ideographs
        | 0xAC00..=0xD7AF    // hangul syllables
        | 0xF900..=0xFAFF    // CJK compatibility ideographs
        | 0xFF66..=0xFF9D    // half-width katakana
        | 0x20000..=0x2A6DF  // CJK extension B
    )
}
