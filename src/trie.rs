//! Provides a Trie over a fixed, ordered [`Alphabet`] of atoms.
//!
//! Every node holds one child slot per atom of the alphabet, so descending
//! from a node to the child for an atom is a single index operation. Keys
//! are supplied as anything which implements `IntoIterator<Item = A>`, so a
//! `&str` key is passed as `"word".chars()`, a grapheme key as
//! `s.graphemes(true)` and so on.
//!
//! Every operation validates its key before it touches a node. An empty key,
//! or a key containing an atom outside the alphabet, is rejected with an
//! error and leaves the trie exactly as it was.
//!
//! Example 1
//! ```
//! use alphatrie::trie::Trie;
//!
//! let mut trie = Trie::default();
//! trie.insert("bat".chars())?;
//! trie.insert("bath".chars())?;
//! trie.insert("batman".chars())?;
//!
//! assert!(trie.contains("bat".chars())?);
//! assert!(!trie.contains("ba".chars())?);
//! assert!(trie.is_prefix("ba".chars())?);
//!
//! trie.delete("bat".chars())?;
//! assert!(!trie.contains("bat".chars())?);
//! assert!(trie.contains("bath".chars())?);
//! assert_eq!(trie.words::<String>(), vec!["bath", "batman"]);
//! # Ok::<(), alphatrie::error::TrieError>(())
//! ```
//!
//! Example 2
//! ```
//! use alphatrie::trie::Trie;
//!
//! let mut trie = Trie::new([0u8, 1]).expect("binary alphabet");
//! trie.insert([1, 0, 1]).expect("valid key");
//! assert!(trie.is_prefix([1, 0]).expect("valid key"));
//! assert!(trie.contains([1, 0, 2]).is_err());
//! ```
//!
//! Deletion removes the end-of-key marker and then prunes, bottom up, every
//! node which no longer leads to a stored key. Nodes shared with other keys
//! are left alone.

use std::fmt;

use tracing::{debug, trace};

use crate::alphabet::{Alphabet, TrieAtom};
use crate::error::{TrieError, TrieResult};
use crate::iterator::TrieIter;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

const LOG_TARGET: &str = "alphatrie::trie";

/// Handle of a node within a trie's node arena.
pub(crate) type NodeId = usize;

/// The root node always lives at the start of the arena.
pub(crate) const ROOT: NodeId = 0;

/// A Trie of `char` atoms.
pub type TrieString = Trie<char>;

#[derive(Clone, Debug, Default)]
pub(crate) struct Node {
    pub(crate) children: Vec<Option<NodeId>>,
    occupied: usize,
    pub(crate) terminated: bool,
}

impl Node {
    fn new(width: usize) -> Self {
        Self {
            children: vec![None; width],
            ..Default::default()
        }
    }

    #[inline(always)]
    pub(crate) fn child(&self, slot: usize) -> Option<NodeId> {
        self.children.get(slot).copied().flatten()
    }

    /// A node with no children which ends no key supports nothing.
    #[inline(always)]
    fn is_prunable(&self) -> bool {
        self.occupied == 0 && !self.terminated
    }
}

/// Stores keys of atoms as paths of nodes.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        try_from = "SerializedTrie<A>",
        into = "SerializedTrie<A>",
        bound(
            serialize = "A: TrieAtom + Serialize",
            deserialize = "A: TrieAtom + Deserialize<'de>"
        )
    )
)]
pub struct Trie<A> {
    pub(crate) alphabet: Alphabet<A>,
    pub(crate) nodes: Vec<Node>,
    free: Vec<NodeId>,
    count: usize,
}

impl Default for Trie<char> {
    fn default() -> Self {
        Self::with_alphabet(Alphabet::english())
    }
}

impl<A: TrieAtom> Trie<A> {
    /// Create a new Trie over the supplied atoms.
    ///
    /// Fails with [`TrieError::Configuration`] if the atoms do not form a
    /// valid [`Alphabet`].
    pub fn new<I: IntoIterator<Item = A>>(atoms: I) -> TrieResult<Self> {
        Ok(Self::with_alphabet(Alphabet::new(atoms)?))
    }

    /// Create a new Trie over an existing alphabet.
    pub fn with_alphabet(alphabet: Alphabet<A>) -> Self {
        let root = Node::new(alphabet.len());
        Self {
            alphabet,
            nodes: vec![root],
            free: vec![],
            count: 0,
        }
    }

    /// The alphabet this Trie was built with.
    pub fn alphabet(&self) -> &Alphabet<A> {
        &self.alphabet
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.nodes = vec![Node::new(self.alphabet.len())];
        self.free.clear();
        debug!(target: LOG_TARGET, keys = self.count, "Cleared trie");
        self.count = 0;
    }

    /// Does the Trie contain the supplied key?
    pub fn contains<K: IntoIterator<Item = A>>(&self, key: K) -> TrieResult<bool> {
        self.contains_internal(key, |n: &Node| n.terminated)
    }

    /// Is the supplied prefix a prefix of (or equal to) some stored key?
    pub fn is_prefix<P: IntoIterator<Item = A>>(&self, prefix: P) -> TrieResult<bool> {
        self.contains_internal(prefix, |_| true)
    }

    /// How many keys does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// How many nodes does the Trie hold, including the root?
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Insert the key into the Trie. Returns true if the key was not already
    /// present.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> TrieResult<bool> {
        let slots = self.alphabet.slots(key)?;
        Ok(self.insert_internal(&slots))
    }

    /// Insert every key. All keys are validated before any is inserted, so
    /// on error the Trie is unchanged. Returns how many keys were new.
    pub fn insert_all<I, K>(&mut self, keys: I) -> TrieResult<usize>
    where
        I: IntoIterator<Item = K>,
        K: IntoIterator<Item = A>,
    {
        let keys = keys
            .into_iter()
            .map(|key| self.alphabet.slots(key))
            .collect::<TrieResult<Vec<Vec<usize>>>>()?;
        let mut added = 0;
        for slots in &keys {
            if self.insert_internal(slots) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Create an iterator over the keys of the Trie.
    ///
    /// Keys are produced depth first, a key before its extensions and
    /// siblings in alphabet order.
    pub fn iter(&self) -> TrieIter<'_, A> {
        self.into_iter()
    }

    /// Collect every key, each converted with `FromIterator`.
    pub fn words<K: FromIterator<A>>(&self) -> Vec<K> {
        self.iter().map(|key| key.into_iter().collect()).collect()
    }

    /// Remove the key from the Trie.
    ///
    /// Fails with [`TrieError::NotFound`] if the key is not present, in which
    /// case nothing is modified.
    pub fn delete<K: IntoIterator<Item = A>>(&mut self, key: K) -> TrieResult<()> {
        let slots = self.alphabet.slots(key)?;
        if self.remove_internal(&slots) {
            Ok(())
        } else {
            Err(TrieError::NotFound(self.alphabet.render(&slots)))
        }
    }

    /// Remove the key from the Trie without first requiring it to be
    /// present. Returns true if the key was removed.
    pub fn delete_unchecked<K: IntoIterator<Item = A>>(&mut self, key: K) -> TrieResult<bool> {
        let slots = self.alphabet.slots(key)?;
        Ok(self.remove_internal(&slots))
    }

    fn contains_internal<F: Fn(&Node) -> bool, K: IntoIterator<Item = A>>(
        &self,
        key: K,
        f: F,
    ) -> TrieResult<bool> {
        let slots = self.alphabet.slots(key)?;
        Ok(self.find(&slots).map_or(false, |n| f(&self.nodes[n])))
    }

    fn find(&self, slots: &[usize]) -> Option<NodeId> {
        slots
            .iter()
            .try_fold(ROOT, |node, slot| self.nodes[node].child(*slot))
    }

    fn insert_internal(&mut self, slots: &[usize]) -> bool {
        let mut node = ROOT;
        for slot in slots.iter().copied() {
            let next = self.nodes[node].child(slot);
            node = match next {
                Some(child) => child,
                None => {
                    let child = self.allocate();
                    let parent = &mut self.nodes[node];
                    parent.children[slot] = Some(child);
                    parent.occupied += 1;
                    child
                }
            };
        }
        let end = &mut self.nodes[node];
        if end.terminated {
            return false;
        }
        end.terminated = true;
        self.count += 1;
        trace!(target: LOG_TARGET, key = %self.alphabet.render(slots), "Inserted new key");
        true
    }

    fn remove_internal(&mut self, slots: &[usize]) -> bool {
        // (parent, slot, child) for every step from the root
        let mut path = Vec::with_capacity(slots.len());
        let mut node = ROOT;
        for slot in slots.iter().copied() {
            match self.nodes[node].child(slot) {
                Some(child) => {
                    path.push((node, slot, child));
                    node = child;
                }
                None => return false,
            }
        }
        let end = &mut self.nodes[node];
        if !end.terminated {
            return false;
        }
        end.terminated = false;
        self.count -= 1;

        let mut pruned = 0;
        for (parent, slot, child) in path.into_iter().rev() {
            if !self.nodes[child].is_prunable() {
                break;
            }
            let parent = &mut self.nodes[parent];
            parent.children[slot] = None;
            parent.occupied -= 1;
            self.release(child);
            pruned += 1;
        }
        debug!(
            target: LOG_TARGET,
            key = %self.alphabet.render(slots),
            pruned,
            "Deleted key"
        );
        true
    }

    fn allocate(&mut self) -> NodeId {
        let node = Node::new(self.alphabet.len());
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        // Drop the slot vector; allocate() builds a fresh one on reuse
        self.nodes[id] = Node::default();
        self.free.push(id);
    }
}

impl<A: TrieAtom> PartialEq for Trie<A> {
    fn eq(&self, other: &Self) -> bool {
        self.alphabet == other.alphabet
            && self.count == other.count
            && self.iter().eq(other.iter())
    }
}

impl<A: TrieAtom + fmt::Display> fmt::Display for Trie<A> {
    /// Keys in iteration order, separated by ", ".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, key) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            for atom in key {
                write!(f, "{}", atom)?;
            }
        }
        Ok(())
    }
}

/// Wire form of a Trie: the alphabet and the stored keys. Rebuilding from
/// keys means a deserialized Trie always satisfies the node invariants.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(
    crate = "serde_crate",
    bound(
        serialize = "A: TrieAtom + Serialize",
        deserialize = "A: TrieAtom + Deserialize<'de>"
    )
)]
struct SerializedTrie<A> {
    alphabet: Alphabet<A>,
    keys: Vec<Vec<A>>,
}

#[cfg(feature = "serde")]
impl<A: TrieAtom> From<Trie<A>> for SerializedTrie<A> {
    fn from(trie: Trie<A>) -> Self {
        let keys = trie.iter().collect();
        Self {
            alphabet: trie.alphabet,
            keys,
        }
    }
}

#[cfg(feature = "serde")]
impl<A: TrieAtom> TryFrom<SerializedTrie<A>> for Trie<A> {
    type Error = TrieError;

    fn try_from(wire: SerializedTrie<A>) -> TrieResult<Self> {
        let mut trie = Trie::with_alphabet(wire.alphabet);
        trie.insert_all(wire.keys)?;
        Ok(trie)
    }
}
