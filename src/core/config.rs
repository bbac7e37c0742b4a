//! Configuration management for the docdex indexer.
//!
//! Loads configuration from a TOML file and environment variables,
//! with sensible defaults for all settings. Precedence: environment
//! variables > TOML file > defaults.

use crate::core::error::{DocdexError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub cleanup: CleanupConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Two-letter language code driving the term pipeline
    #[serde(default = "default_language")]
    pub language: String,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Extraction configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Forced document encoding; skips auto-detection when set
    #[serde(default)]
    pub file_encoding: Option<String>,

    /// Symbolic entity name → code point, extending the built-ins
    #[serde(default)]
    pub symbol_entities: BTreeMap<String, u32>,
}

/// Text cleanup configuration. Empty lists select the built-in
/// defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// Stopwords to remove (overrides the default English list)
    #[serde(default)]
    pub stopwords: Vec<String>,

    /// Punctuation entries to blank (overrides the default classes)
    #[serde(default)]
    pub punctuation: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Path of the JSON index artifact
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,
}

// Default value functions
fn default_language() -> String {
    "en".to_string()
}

fn default_include_patterns() -> Vec<String> {
    vec![
        "*.html".to_string(),
        "*.htm".to_string(),
        "*.xhtml".to_string(),
    ]
}

fn default_max_file_size() -> usize {
    10
}

fn default_index_file() -> PathBuf {
    PathBuf::from("search_index.json")
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            include_patterns: default_include_patterns(),
            exclude_patterns: Vec::new(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            index_file: default_index_file(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocdexError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults.
    ///
    /// The file is taken from `DOCDEX_CONFIG` when set, otherwise
    /// `./docdex.toml` when present.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCDEX_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("docdex.toml").exists() {
            Self::from_file("docdex.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(language) = env::var("DOCDEX_LANGUAGE") {
            if !language.trim().is_empty() {
                self.indexing.language = language;
            }
        }
        if let Ok(encoding) = env::var("DOCDEX_FILE_ENCODING") {
            if !encoding.trim().is_empty() {
                self.extraction.file_encoding = Some(encoding);
            }
        }
        if let Ok(max_size) = env::var("DOCDEX_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.indexing.max_file_size_mb = size;
            }
        }
        if let Ok(index_file) = env::var("DOCDEX_INDEX_FILE") {
            if !index_file.trim().is_empty() {
                self.output.index_file = PathBuf::from(index_file);
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let language = self.indexing.language.trim();
        if language.is_empty() {
            return Err(DocdexError::ConfigError(
                "Language code must not be empty".to_string(),
            ));
        }
        if !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DocdexError::ConfigError(format!(
                "Invalid language code '{language}'"
            )));
        }

        if self.indexing.max_file_size_mb == 0 {
            return Err(DocdexError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.output.index_file.as_os_str().is_empty() {
            return Err(DocdexError::ConfigError(
                "Index file path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
