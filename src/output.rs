//! JSON rendering of a trie

use crate::trie::TrieNode;
use crate::Result;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use std::io::Write;

/// Output format (compact or pretty JSON)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON
    #[default]
    Json,
    /// Indented JSON
    Pretty,
}

/// Write `trie` as JSON followed by a newline
///
/// Produces the same text as the `Serialize` impl on [`TrieNode`], but walks
/// the tree with an explicit stack so an uncompressed trie of very long words
/// cannot exhaust the call stack.
pub fn write_trie<W: Write>(mut writer: W, trie: &TrieNode, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(&mut writer, &mut CompactFormatter, trie)?,
        OutputFormat::Pretty => write_json(&mut writer, &mut PrettyFormatter::new(), trie)?,
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn write_json<W, F>(writer: &mut W, formatter: &mut F, root: &TrieNode) -> Result<()>
where
    W: Write,
    F: Formatter,
{
    formatter.begin_object(writer)?;
    // (remaining entries, no entry written yet)
    let mut stack = vec![(root.children(), true)];

    while let Some((entries, first)) = stack.last_mut() {
        match entries.next() {
            Some((label, child)) => {
                formatter.begin_object_key(writer, *first)?;
                *first = false;
                serde_json::to_writer(&mut *writer, label)?;
                formatter.end_object_key(writer)?;
                formatter.begin_object_value(writer)?;
                if child.is_empty() {
                    formatter.write_bool(writer, false)?;
                    formatter.end_object_value(writer)?;
                } else {
                    formatter.begin_object(writer)?;
                    stack.push((child.children(), true));
                }
            }
            None => {
                stack.pop();
                formatter.end_object(writer)?;
                if !stack.is_empty() {
                    formatter.end_object_value(writer)?;
                }
            }
        }
    }
    Ok(())
}
