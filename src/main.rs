//! triegen CLI - Command line interface for triegen
//!
//! Reads a word list (one word per line) from a file or standard input and
//! prints its trie as JSON on standard output. Logs go to standard error and
//! are controlled with `RUST_LOG`.

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use triegen::{generate, GenerateOptions, OutputFormat, WordSource};

#[derive(Parser)]
#[command(name = "triegen")]
#[command(about = "Generates a character-wise trie in JSON format from a word list")]
#[command(version)]
struct Cli {
    /// Path to the word list (reads standard input if omitted)
    input: Option<PathBuf>,

    /// Output format (json or pretty)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Write the trie without collapsing single-child chains
    #[arg(long)]
    uncompressed: bool,
}

impl Cli {
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            format: self.format,
            compress: !self.uncompressed,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let source = WordSource::from_arg(cli.input.clone());
    debug!(%source, "reading word list");

    let reader = source.open()?;
    let stdout = io::stdout().lock();
    generate(reader, stdout, &cli.options())
        .with_context(|| format!("Failed to generate trie from {}", source))?;

    Ok(())
}
