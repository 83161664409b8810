//! Provides Trie iterators.
//!
use std::iter::FusedIterator;

use crate::alphabet::TrieAtom;
use crate::trie::{NodeId, Trie, ROOT};

/// Iterator over the keys of a Trie.
///
/// Walks the Trie depth first with an explicit stack. Each stack entry is a
/// node and the next child slot to visit from it, and `key` holds the atoms
/// on the path to the top entry. A key is yielded on entering its end node,
/// so a key always comes before its extensions.
#[derive(Debug, Clone)]
pub struct TrieIter<'a, A> {
    trie: &'a Trie<A>,
    stack: Vec<(NodeId, usize)>,
    key: Vec<A>,
}

impl<'a, A: TrieAtom> Iterator for TrieIter<'a, A> {
    type Item = Vec<A>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, next_slot) = self.stack.last_mut()?;
            let children = &self.trie.nodes[*node].children;
            let found = children
                .iter()
                .enumerate()
                .skip(*next_slot)
                .find_map(|(slot, child)| child.map(|c| (slot, c)));
            match found {
                Some((slot, child)) => {
                    *next_slot = slot + 1;
                    self.key.extend(self.trie.alphabet.atom(slot));
                    self.stack.push((child, 0));
                    if self.trie.nodes[child].terminated {
                        return Some(self.key.clone());
                    }
                }
                None => {
                    // Exhausted: back up to the parent
                    self.stack.pop();
                    self.key.pop();
                }
            }
        }
    }
}

impl<'a, A: TrieAtom> FusedIterator for TrieIter<'a, A> {}

impl<'a, A: TrieAtom> IntoIterator for &'a Trie<A> {
    type Item = Vec<A>;
    type IntoIter = TrieIter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        TrieIter {
            trie: self,
            stack: vec![(ROOT, 0)],
            key: vec![],
        }
    }
}
