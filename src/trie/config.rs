/// Largest number of nodes an arena can ever address with a `u32` handle.
pub const MAX_NODES: usize = u32::MAX as usize;

/// Node capacity reserved by the first growth of an arena.
pub const DEFAULT_INITIAL_CAPACITY: usize = 2048;

/// Sizing knobs for a [`Trie`](super::Trie) and its [`NodeArena`](super::NodeArena).
///
/// ```
/// use libtrie::trie::{Trie, TrieConfig};
///
/// let config = TrieConfig::default().initial_capacity(64).max_nodes(10_000);
/// let trie = Trie::with_config(&config);
/// assert_eq!(trie.node_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieConfig {
    initial_capacity: usize,
    max_nodes: usize,
}

impl TrieConfig {
    /// Sets the capacity reserved the first time the arena grows.
    ///
    /// Later growth at least doubles the capacity.
    pub fn initial_capacity(mut self, nodes: usize) -> Self {
        self.initial_capacity = nodes.max(1);
        self
    }

    /// Caps the number of nodes, root included. Clamped to [`MAX_NODES`].
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes.clamp(1, MAX_NODES);
        self
    }

    /// Returns the configured initial capacity.
    pub fn get_initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the configured node limit.
    pub fn get_max_nodes(&self) -> usize {
        self.max_nodes
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        TrieConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_nodes: MAX_NODES,
        }
    }
}
