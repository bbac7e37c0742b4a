//! docdex CLI - command-line interface for the documentation indexer
//!
//! # Examples
//!
//! ```bash
//! # Index a generated documentation tree
//! docdex index ./build/html --language en
//!
//! # Force a document encoding and a custom output path
//! docdex index ./build/html --encoding ISO-8859-1 -o site/search_index.json
//!
//! # Show effective configuration
//! docdex show-config --all
//! ```

use clap::Parser;
use docdex::cli::{output, run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .compact()
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
