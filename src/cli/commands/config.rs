//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Include the cleanup word and punctuation overrides
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub language: String,
    pub file_encoding: Option<String>,
    pub index_file: String,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub max_file_size_mb: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopword_overrides: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punctuation_overrides: Option<Vec<String>>,
}

/// Execute the show-config command
pub fn execute(
    args: ConfigArgs,
    config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        language: config.indexing.language.clone(),
        file_encoding: config.extraction.file_encoding.clone(),
        index_file: config.output.index_file.to_string_lossy().into_owned(),
        include_patterns: config.indexing.include_patterns.clone(),
        exclude_patterns: config.indexing.exclude_patterns.clone(),
        max_file_size_mb: config.indexing.max_file_size_mb,
        stopword_overrides: args.all.then(|| config.cleanup.stopwords.clone()),
        punctuation_overrides: args.all.then(|| config.cleanup.punctuation.clone()),
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  language: {}", response.language);
            println!(
                "  file_encoding: {}",
                response.file_encoding.as_deref().unwrap_or("(auto-detect)")
            );
            println!("  index_file: {}", response.index_file);
            println!("  include_patterns: {:?}", response.include_patterns);
            println!("  exclude_patterns: {:?}", response.exclude_patterns);
            println!("  max_file_size_mb: {}", response.max_file_size_mb);
            if let Some(stopwords) = &response.stopword_overrides {
                println!("  stopword_overrides: {stopwords:?}");
            }
            if let Some(punctuation) = &response.punctuation_overrides {
                println!("  punctuation_overrides: {punctuation:?}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
