//! One generator run: read words, build, compress, write JSON

use crate::input::WordReader;
use crate::output::{write_trie, OutputFormat};
use crate::trie::{compress, TrieBuilder};
use crate::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Options for a generator run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    /// How the JSON is laid out
    pub format: OutputFormat,
    /// Collapse single-child chains before writing
    pub compress: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            format: OutputFormat::Json,
            compress: true,
        }
    }
}

/// Summary of a finished run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateReport {
    /// Distinct non-blank words read
    pub words: usize,
    /// Nodes in the trie as built, root included
    pub nodes_built: usize,
    /// Nodes in the trie as written
    pub nodes_written: usize,
}

/// Read a word list from `reader` and write its trie to `writer`
///
/// Nothing is written if reading fails part way through.
pub fn generate<R, W>(reader: R, writer: W, options: &GenerateOptions) -> Result<GenerateReport>
where
    R: BufRead,
    W: Write,
{
    debug!(?options, "generating trie");

    let mut builder = TrieBuilder::new();
    for line in WordReader::new(reader) {
        builder.insert(&line?);
    }
    let words = builder.len();
    let trie = builder.finish();
    let nodes_built = trie.node_count();

    let trie = if options.compress { compress(trie) } else { trie };
    let nodes_written = trie.node_count();

    info!(words, nodes_built, nodes_written, "trie built");

    write_trie(writer, &trie, options.format)?;

    Ok(GenerateReport {
        words,
        nodes_built,
        nodes_written,
    })
}
