//! Index command - index a documentation tree

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::indexer::IndexingPipeline;
use crate::core::persist;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the index command
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Root directory of the generated documentation
    pub root: PathBuf,

    /// Two-letter language code for stemming/segmentation
    #[arg(long, short = 'l')]
    pub language: Option<String>,

    /// Force a document encoding, skipping auto-detection
    #[arg(long)]
    pub encoding: Option<String>,

    /// Output path for the index artifact
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Glob patterns to include (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Indexing result response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub root: String,
    pub index_file: String,
    pub language: String,
    pub documents_indexed: usize,
    pub documents_failed: usize,
    pub distinct_terms: usize,
    pub duration_secs: f64,
}

/// Execute the index command
pub fn execute(
    args: IndexArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = args.root.canonicalize().map_err(|e| {
        format!(
            "Invalid path '{}': {}. Make sure the path exists and is accessible.",
            args.root.display(),
            e
        )
    })?;

    if !root.is_dir() {
        return Err(format!(
            "Path '{}' is not a directory. docdex indexes a documentation tree, \
             not individual files.",
            root.display()
        )
        .into());
    }

    // Flags override the loaded configuration
    if let Some(language) = args.language {
        config.indexing.language = language;
    }
    if let Some(encoding) = args.encoding {
        config.extraction.file_encoding = Some(encoding);
    }
    if let Some(output) = args.output {
        config.output.index_file = output;
    }
    if !args.include.is_empty() {
        config.indexing.include_patterns = args.include;
    }
    if !args.exclude.is_empty() {
        config.indexing.exclude_patterns = args.exclude;
    }
    config.validate()?;

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Indexing {} ({})...",
            colors::file_path(&root.display().to_string()),
            colors::dim(&config.indexing.language)
        );
    }

    let pipeline = IndexingPipeline::from_config(&config)?;
    let run = pipeline.index_directory(&root)?;
    persist::write_artifact(&config.output.index_file, &run, &config.indexing.language)?;

    let response = IndexResponse {
        root: root.to_string_lossy().into_owned(),
        index_file: config.output.index_file.to_string_lossy().into_owned(),
        language: config.indexing.language,
        documents_indexed: run.stats.documents_indexed,
        documents_failed: run.stats.documents_failed,
        distinct_terms: run.stats.distinct_terms,
        duration_secs: run.stats.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} documents ({} terms) in {}",
                colors::success("Indexed"),
                colors::number(&response.documents_indexed.to_string()),
                colors::number(&response.distinct_terms.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            if response.documents_failed > 0 {
                println!(
                    "{} {} document(s) contributed no text",
                    colors::warning("Note:"),
                    colors::number(&response.documents_failed.to_string())
                );
            }
            println!("Index written to {}", colors::file_path(&response.index_file));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
