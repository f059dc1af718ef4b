//! Character trie construction

use super::TrieNode;

/// Incremental builder for an uncompressed character trie
///
/// Each inserted line is trimmed and blank lines are ignored. Words may arrive
/// in any order and may repeat; the finished trie only depends on the set of
/// distinct words.
#[derive(Debug, Default)]
pub struct TrieBuilder {
    root: TrieNode,
    words: usize,
}

impl TrieBuilder {
    /// Create a builder holding no words
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one raw input line
    pub fn insert(&mut self, line: &str) {
        let word = line.trim();
        if !word.is_empty() && insert_word(&mut self.root, word) {
            self.words += 1;
        }
    }

    /// Number of distinct words inserted so far
    pub fn len(&self) -> usize {
        self.words
    }

    /// Check if no word has been inserted
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Finish building and hand over the trie
    pub fn finish(self) -> TrieNode {
        self.root
    }
}

/// Build an uncompressed trie from raw input lines
pub fn build<I, T>(words: I) -> TrieNode
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut builder = TrieBuilder::new();
    for word in words {
        builder.insert(word.as_ref());
    }
    builder.finish()
}

/// Returns true if `word` was not in the trie yet
fn insert_word(root: &mut TrieNode, word: &str) -> bool {
    let mut current = root;
    let mut added = false;
    let mut chars = word.chars().peekable();

    while let Some(ch) = chars.next() {
        let is_last = chars.peek().is_none();
        let mut label = [0; 4];
        let label: &str = ch.encode_utf8(&mut label);

        // An empty target means a word already ends on this edge. A target that
        // both ends a word and continues carries a terminal marker.
        match current.child_mut(label) {
            Some(child) if child.is_empty() != is_last => {
                let marked = child.mark_terminal();
                added = is_last && marked;
            }
            Some(_) => {}
            None => added = is_last,
        }

        current = current.entry(label.to_owned());
    }
    added
}
