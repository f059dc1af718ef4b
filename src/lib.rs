//! # triegen
//!
//! Generates a character-wise trie in JSON format from a word list.
//!
//! Words are inserted one character per edge, then every run of single-child
//! nodes is folded into one edge with a multi-character label. The output is
//! meant to be embedded by other programs as a compact word set.
//!
//! ## Core Concepts
//!
//! - **Edges**: a node is a sorted map from label to child
//! - **Word ends**: an edge pointing at an empty node ends a word
//! - **Terminal marker**: a `""` entry ends a word at a node that also continues
//! - **Chains**: single-child runs, collapsed by [`compress`]
//!
//! ## Example
//!
//! ```
//! use triegen::{build, compress};
//!
//! let trie = compress(build(["cat", "catalog", "dog"]));
//! assert_eq!(trie.words(), vec!["cat", "catalog", "dog"]);
//! assert_eq!(
//!     serde_json::to_string(&trie).unwrap(),
//!     r#"{"cat":{"":false,"alog":false},"dog":false}"#
//! );
//! ```

pub mod input;
pub mod output;
pub mod trie;

mod error;
mod generate;

pub use error::{Error, Result};
pub use generate::{generate, GenerateOptions, GenerateReport};
pub use input::{WordReader, WordSource};
pub use output::{write_trie, OutputFormat};
pub use trie::{build, compress, TrieBuilder, TrieNode, TERMINAL};
