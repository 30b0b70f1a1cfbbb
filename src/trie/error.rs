//! Error types for trie construction and lookup.

use thiserror::Error;

/// Result type alias for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;

/// Errors raised by the arena and the trie core.
///
/// [`AllocationFailure`](TrieError::AllocationFailure) and
/// [`CapacityExceeded`](TrieError::CapacityExceeded) are fatal: the build step
/// that hit them must be abandoned. The other two are ordinary negative results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// Growing the node storage failed.
    #[error("failed to grow node storage to {requested} nodes")]
    AllocationFailure {
        /// Total node capacity that was requested.
        requested: usize,
    },

    /// The node count would exceed the largest representable handle.
    #[error("too many nodes: the arena is limited to {limit} nodes")]
    CapacityExceeded {
        /// Maximum number of nodes the arena may hold.
        limit: usize,
    },

    /// An entry or prefix contains a byte outside the printable ASCII alphabet.
    #[error("invalid symbol {symbol:#04x} at position {position}")]
    InvalidSymbol {
        /// The offending byte.
        symbol: u8,
        /// Byte offset of the symbol within its entry.
        position: usize,
    },

    /// No stored entry starts with the given prefix.
    #[error("unable to find prefix {prefix:?}")]
    PrefixNotFound {
        /// The prefix that was looked up.
        prefix: String,
    },
}

impl TrieError {
    /// Create a prefix-not-found error
    pub fn prefix_not_found(prefix: impl Into<String>) -> Self {
        TrieError::PrefixNotFound {
            prefix: prefix.into(),
        }
    }

    /// True for allocation-class failures, which must abort the build.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TrieError::AllocationFailure { .. } | TrieError::CapacityExceeded { .. }
        )
    }
}

/// Errors raised while loading entries from a line-oriented source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading the source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Building the trie failed.
    #[error(transparent)]
    Trie(#[from] TrieError),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn allocation_class_is_fatal() {
        assert!(TrieError::AllocationFailure { requested: 4 }.is_fatal());
        assert!(TrieError::CapacityExceeded { limit: 4 }.is_fatal());
        assert!(!TrieError::prefix_not_found("xyz").is_fatal());
        assert!(
            !TrieError::InvalidSymbol {
                symbol: b'\t',
                position: 0
            }
            .is_fatal()
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            TrieError::prefix_not_found("xyz").to_string(),
            "unable to find prefix \"xyz\""
        );
        assert_eq!(
            TrieError::InvalidSymbol {
                symbol: b'\t',
                position: 3
            }
            .to_string(),
            "invalid symbol 0x09 at position 3"
        );
    }

    #[test]
    fn load_error_wraps_trie_error() {
        let err: LoadError = TrieError::CapacityExceeded { limit: 1 }.into();
        assert!(matches!(err, LoadError::Trie(TrieError::CapacityExceeded { limit: 1 })));
    }
}
