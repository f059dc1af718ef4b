//! Chain compression
//!
//! Every maximal run of single-entry nodes is folded into the edge above it,
//! whose label becomes the concatenation of the folded labels. Nodes with zero
//! entries or two or more entries (a terminal marker counts as an entry) stop
//! a chain. The set of words in the trie never changes.

use super::TrieNode;

/// Result of collapsing one subtree
///
/// `path` is the label run the parent should append to its edge and
/// `terminus` the node that edge should point at afterwards. A subtree that
/// cannot be folded reports an empty path and itself as terminus.
#[derive(Debug)]
struct Chain {
    path: String,
    terminus: TrieNode,
}

/// Collapse all single-child chains below `root`
///
/// The root itself is never folded into anything, so a trie holding only
/// `hello` comes back as `{"hello": {}}`. Compressing a compressed trie is a
/// no-op.
pub fn compress(mut root: TrieNode) -> TrieNode {
    absorb_children(&mut root);
    root
}

/// Walks down the single-entry run starting at `node` in a loop and only
/// recurses at the branching node or leaf that ends it, so depth follows the
/// number of branches rather than word length.
fn collapse(mut node: TrieNode) -> Chain {
    let mut path = String::new();
    while node.len() == 1 {
        match node.take_children().pop_first() {
            Some((label, child)) => {
                path.push_str(&label);
                node = child;
            }
            None => break,
        }
    }

    absorb_children(&mut node);
    Chain {
        path,
        terminus: node,
    }
}

/// Rewrites every entry `(label, child)` as `(label + path, terminus)` of the
/// child's collapsed chain. The map is rebuilt rather than edited in place.
fn absorb_children(node: &mut TrieNode) {
    let children = node
        .take_children()
        .into_iter()
        .map(|(mut label, child)| {
            let chain = collapse(child);
            label.push_str(&chain.path);
            (label, chain.terminus)
        })
        .collect();
    node.set_children(children);
}
