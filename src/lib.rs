//! Provides a Trie over a fixed, ordered alphabet of atoms. Keys are
//! sequences of atoms drawn from that alphabet.
//!
//! The alphabet is supplied when the Trie is created and never changes.
//! Each atom has a stable slot index, and every node in the Trie carries
//! one child slot per atom. Descent is therefore one index per atom, and
//! the order of the alphabet is the order in which keys are enumerated.
//!
//! Atoms must support the [`crate::alphabet::TrieAtom`] trait. `char` is
//! the common case, and [`crate::trie::TrieString`] with its default
//! alphabet of lowercase Latin letters is provided for it. Any other
//! `Copy + Eq + Hash + Debug` type works too: bytes, small integers,
//! grapheme clusters as `&str` and so on.
//!
//! Operations:
//!  - insert, contains, is_prefix
//!  - delete (removes the key and prunes nodes no other key needs)
//!  - iteration over every stored key, depth first in alphabet order
//!
//! Every operation validates its key before touching the Trie. Malformed
//! keys are reported as a [`crate::error::TrieError`] and never cause a
//! partial update.
//!
//! Examples:
//! * alphabet : [`crate::alphabet`]
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod alphabet;

pub mod error;

pub mod iterator;

pub mod trie;
