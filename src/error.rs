//! Error types for trie construction and key processing.

/// Errors that can occur when building or using a [`crate::trie::Trie`].
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// The supplied alphabet cannot produce an unambiguous index mapping.
    #[error("Invalid alphabet: {0}")]
    Configuration(String),

    /// An empty key was supplied.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// A key contains an atom which is not a member of the alphabet.
    #[error("Atom {atom} at position {position} is not in the alphabet")]
    UnknownAtom {
        /// The offending atom, rendered with `Debug`.
        atom: String,
        /// Zero based position of the atom within the key.
        position: usize,
    },

    /// A checked delete was attempted for a key the trie does not contain.
    #[error("Key {0} is not present in the trie")]
    NotFound(String),
}

impl TrieError {
    /// Is this error the result of a malformed key?
    pub fn is_validation(&self) -> bool {
        matches!(self, TrieError::EmptyKey | TrieError::UnknownAtom { .. })
    }
}

/// Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;
