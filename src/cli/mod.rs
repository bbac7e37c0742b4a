//! CLI adapter for docdex
//!
//! Thin command-line layer over `core/`. Command handlers parse and
//! validate arguments, drive the indexing pipeline, and format the
//! result; all indexing semantics live in the core.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// docdex - documentation search indexer
///
/// Extracts indexable text from generated (X)HTML documentation and
/// writes a term-to-document index for the site's search frontend.
#[derive(Parser, Debug)]
#[command(name = "docdex")]
#[command(version)]
#[command(about = "Full-text search indexer for documentation sites", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index a documentation tree
    Index(commands::IndexArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docdex completions bash > ~/.local/share/bash-completion/completions/docdex
    ///   zsh:   docdex completions zsh > ~/.zfunc/_docdex
    ///   fish:  docdex completions fish > ~/.config/fish/completions/docdex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Completions don't need configuration
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;

    match cli.command {
        Commands::Index(args) => commands::index::execute(args, config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
