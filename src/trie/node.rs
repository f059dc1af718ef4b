//! Trie node type

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Label of the entry that marks a word ending at a node which also continues.
///
/// Appending it to a path adds nothing, so the leaf path through this entry is
/// the prefix word itself.
pub const TERMINAL: &str = "";

/// A node in the word trie
///
/// A node is nothing but its outgoing edges. An edge whose target has no
/// entries marks the end of a word:
/// - `{"a": {}}` holds the single word `a`
/// - `{"a": {"": {}, "t": {}}}` holds `a` and `at`
///
/// Labels are single characters straight out of the builder and arbitrary
/// strings once chains have been compressed. Keys are kept sorted so that
/// iteration and serialization are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: BTreeMap<String, TrieNode>,
}

impl TrieNode {
    /// Create a node with no entries
    pub fn new() -> Self {
        TrieNode {
            children: BTreeMap::new(),
        }
    }

    /// Check if this node has no entries
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of entries on this node
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Child reached through `label`, if any
    pub fn get(&self, label: &str) -> Option<&TrieNode> {
        self.children.get(label)
    }

    /// Entries in label order
    pub fn children(&self) -> impl Iterator<Item = (&str, &TrieNode)> {
        self.children.iter().map(|(label, child)| (label.as_str(), child))
    }

    /// Whether a word ends exactly at this node while the node also continues
    pub fn has_terminal_marker(&self) -> bool {
        self.children.contains_key(TERMINAL)
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }

    /// Every word stored below this node, in label order
    ///
    /// A word is the concatenation of labels along a path that ends in an
    /// empty node. The walk keeps its own stack, so arbitrarily long words
    /// are fine.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut path = String::new();
        // (remaining entries, path length at that node)
        let mut stack = vec![(self.children.iter(), 0)];

        while let Some((entries, base)) = stack.last_mut() {
            match entries.next() {
                Some((label, child)) => {
                    path.truncate(*base);
                    path.push_str(label);
                    if child.is_empty() {
                        words.push(path.clone());
                    } else {
                        stack.push((child.children.iter(), path.len()));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
        words
    }

    pub(crate) fn child_mut(&mut self, label: &str) -> Option<&mut TrieNode> {
        self.children.get_mut(label)
    }

    pub(crate) fn entry(&mut self, label: String) -> &mut TrieNode {
        self.children.entry(label).or_default()
    }

    /// Adds the terminal marker; returns false if it was already there
    pub(crate) fn mark_terminal(&mut self) -> bool {
        if self.children.contains_key(TERMINAL) {
            return false;
        }
        self.children.insert(TERMINAL.to_owned(), TrieNode::new());
        true
    }

    pub(crate) fn take_children(&mut self) -> BTreeMap<String, TrieNode> {
        std::mem::take(&mut self.children)
    }

    pub(crate) fn set_children(&mut self, children: BTreeMap<String, TrieNode>) {
        self.children = children;
    }
}

impl FromIterator<(String, TrieNode)> for TrieNode {
    fn from_iter<I: IntoIterator<Item = (String, TrieNode)>>(iter: I) -> Self {
        TrieNode {
            children: iter.into_iter().collect(),
        }
    }
}

/// Frees the subtree with an explicit stack. An uncompressed word is one node
/// per character, too deep for the default recursive drop.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.take_children().into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children().into_values());
        }
    }
}

/// Serializes as a map from label to child. A child with no entries is written
/// as `false`; the node itself is always a map, so an empty root is `{}`.
///
/// This recurses once per nesting level. [`write_trie`](crate::write_trie)
/// produces the same JSON without recursing.
impl Serialize for TrieNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.children.len()))?;
        for (label, child) in &self.children {
            map.serialize_entry(label, &Edge(child))?;
        }
        map.end()
    }
}

struct Edge<'a>(&'a TrieNode);

impl Serialize for Edge<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            serializer.serialize_bool(false)
        } else {
            self.0.serialize(serializer)
        }
    }
}
