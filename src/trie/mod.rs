//! Character trie for a word list
//!
//! This builds a trie where:
//! - Each edge is labelled by one character straight out of the builder
//! - A word ends wherever an edge points at an empty node
//! - Chain compression folds single-child runs into multi-character labels

mod builder;
mod compress;
mod node;

pub use builder::{build, TrieBuilder};
pub use compress::compress;
pub use node::{TrieNode, TERMINAL};
