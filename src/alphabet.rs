//! Provides the fixed, ordered set of atoms a [`crate::trie::Trie`] is built
//! over.
//!
//! An alphabet maps every atom to a stable slot index. Each node in the trie
//! holds one child slot per atom, so the index of an atom is also the index
//! of the child slot it selects. The mapping is derived once, when the
//! alphabet is created, and never changes.
//!
//! ```
//! use alphatrie::alphabet::Alphabet;
//!
//! let alphabet = Alphabet::new("acgt".chars()).expect("valid alphabet");
//! assert_eq!(alphabet.len(), 4);
//! assert_eq!(alphabet.index_of(&'g'), Some(2));
//! assert_eq!(alphabet.atom(3), Some('t'));
//! assert!(Alphabet::new("abca".chars()).is_err());
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{TrieError, TrieResult};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The lowercase Latin letters used by [`Alphabet::english`].
pub const ENGLISH: &str = "abcdefghijklmnopqrstuvwxyz";

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Eq + Hash + Debug {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A where A: Copy + Eq + Hash + Debug {}

/// An ordered set of unique atoms together with its atom to slot mapping.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        try_from = "Vec<A>",
        into = "Vec<A>",
        bound(
            serialize = "A: TrieAtom + Serialize",
            deserialize = "A: TrieAtom + Deserialize<'de>"
        )
    )
)]
pub struct Alphabet<A> {
    atoms: Vec<A>,
    index: HashMap<A, usize>,
}

impl<A: TrieAtom> Alphabet<A> {
    /// Create an alphabet from an ordered sequence of atoms.
    ///
    /// The position of each atom in the sequence becomes its slot index.
    /// Fails with [`TrieError::Configuration`] if the sequence is empty or
    /// names the same atom twice.
    pub fn new<I: IntoIterator<Item = A>>(atoms: I) -> TrieResult<Self> {
        let atoms: Vec<A> = atoms.into_iter().collect();
        if atoms.is_empty() {
            return Err(TrieError::Configuration(
                "alphabet must contain at least one atom".to_string(),
            ));
        }
        let mut index = HashMap::with_capacity(atoms.len());
        for (slot, atom) in atoms.iter().enumerate() {
            if let Some(first) = index.insert(*atom, slot) {
                return Err(TrieError::Configuration(format!(
                    "duplicate atom {:?} at positions {} and {}",
                    atom, first, slot
                )));
            }
        }
        Ok(Self { atoms, index })
    }

    /// Number of atoms, which is also the number of child slots per node.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Is the alphabet empty? Never true for an alphabet built by
    /// [`Alphabet::new`].
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Slot index of `atom`, if it is a member.
    #[inline(always)]
    pub fn index_of(&self, atom: &A) -> Option<usize> {
        self.index.get(atom).copied()
    }

    /// Atom stored at `slot`, if in range.
    #[inline(always)]
    pub fn atom(&self, slot: usize) -> Option<A> {
        self.atoms.get(slot).copied()
    }

    /// Is `atom` a member of the alphabet?
    pub fn contains(&self, atom: &A) -> bool {
        self.index.contains_key(atom)
    }

    /// Iterate over the atoms in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.atoms.iter()
    }

    /// Translate a key into slot indices.
    ///
    /// This is the validation pass every trie operation runs before it
    /// touches a node: the whole key is checked, so a failure here leaves
    /// the trie untouched.
    pub(crate) fn slots<K: IntoIterator<Item = A>>(&self, key: K) -> TrieResult<Vec<usize>> {
        let slots = key
            .into_iter()
            .enumerate()
            .map(|(position, atom)| {
                self.index_of(&atom).ok_or_else(|| TrieError::UnknownAtom {
                    atom: format!("{:?}", atom),
                    position,
                })
            })
            .collect::<TrieResult<Vec<usize>>>()?;
        if slots.is_empty() {
            return Err(TrieError::EmptyKey);
        }
        Ok(slots)
    }

    /// Rebuild a key from slot indices, as a `Debug` string for error
    /// reporting.
    pub(crate) fn render(&self, slots: &[usize]) -> String {
        let atoms: Vec<A> = slots.iter().filter_map(|slot| self.atom(*slot)).collect();
        format!("{:?}", atoms)
    }
}

impl Alphabet<char> {
    /// The 26 lowercase Latin letters, in order.
    pub fn english() -> Self {
        let atoms: Vec<char> = ENGLISH.chars().collect();
        let index = atoms
            .iter()
            .enumerate()
            .map(|(slot, atom)| (*atom, slot))
            .collect();
        Self { atoms, index }
    }
}

impl Default for Alphabet<char> {
    fn default() -> Self {
        Self::english()
    }
}

impl<A: PartialEq> PartialEq for Alphabet<A> {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from the atoms
        self.atoms == other.atoms
    }
}

impl<A: Eq> Eq for Alphabet<A> {}

impl<A: TrieAtom> TryFrom<Vec<A>> for Alphabet<A> {
    type Error = TrieError;

    fn try_from(atoms: Vec<A>) -> TrieResult<Self> {
        Self::new(atoms)
    }
}

impl TryFrom<&str> for Alphabet<char> {
    type Error = TrieError;

    fn try_from(atoms: &str) -> TrieResult<Self> {
        Self::new(atoms.chars())
    }
}

impl<A> From<Alphabet<A>> for Vec<A> {
    fn from(alphabet: Alphabet<A>) -> Self {
        alphabet.atoms
    }
}

impl<'a, A> IntoIterator for &'a Alphabet<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
