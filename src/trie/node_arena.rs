//! Append-only node storage addressed by integer handles.
//!
//! All nodes of a trie live in one densely packed `Vec`. A [`NodeId`] is an
//! index into it, so handles survive the vector being reallocated on growth.
//! Nothing is freed individually; the arena is dropped as a whole.

use std::mem;

use tracing::debug;

use super::config::TrieConfig;
use super::error::{Result, TrieError};
use super::node::{Node, NodeId};

/// Handle-addressed storage for trie nodes.
///
/// The root node (handle 0) is allocated on construction.
#[derive(Clone, Debug)]
pub struct NodeArena {
    nodes: Vec<Node>,
    min_capacity: usize,
    max_nodes: usize,
}

impl NodeArena {
    /// Creates an arena holding only the root, with default sizing.
    pub fn new() -> Self {
        Self::with_config(&TrieConfig::default())
    }

    /// Creates an arena holding only the root.
    pub fn with_config(config: &TrieConfig) -> Self {
        NodeArena {
            nodes: vec![Node::new()],
            min_capacity: config.get_initial_capacity(),
            max_nodes: config.get_max_nodes(),
        }
    }

    /// Allocates a fresh node and returns its handle.
    ///
    /// The node has no children and is not terminal. When the storage is full
    /// its capacity at least doubles, never beyond the configured node limit.
    ///
    /// # Errors
    ///
    /// * [`TrieError::CapacityExceeded`] if the arena already holds the maximum
    ///   number of nodes.
    /// * [`TrieError::AllocationFailure`] if the storage could not be grown.
    pub fn allocate(&mut self) -> Result<NodeId> {
        let len = self.nodes.len();
        if len >= self.max_nodes {
            return Err(TrieError::CapacityExceeded {
                limit: self.max_nodes,
            });
        }
        if len == self.nodes.capacity() {
            self.grow()?;
        }

        // `len < max_nodes <= u32::MAX`, so the index always fits.
        let id = NodeId::new(len as u32);
        self.nodes.push(Node::new());
        Ok(id)
    }

    fn grow(&mut self) -> Result<()> {
        let len = self.nodes.len();
        let old_capacity = self.nodes.capacity();
        let target = old_capacity
            .saturating_mul(2)
            .max(self.min_capacity)
            .min(self.max_nodes);
        debug_assert!(target > len);

        self.nodes
            .try_reserve_exact(target - len)
            .map_err(|_| TrieError::AllocationFailure { requested: target })?;

        debug!(
            old_capacity,
            new_capacity = self.nodes.capacity(),
            "grew node arena"
        );
        Ok(())
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Returns the node behind `id` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Returns the node behind `id`, or `None` for a foreign handle.
    pub fn try_get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Returns the number of nodes in use, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// An arena is never empty: the root always exists.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of nodes the arena can hold without growing.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the node limit of this arena.
    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Bytes occupied by nodes in use.
    pub fn bytes_used(&self) -> usize {
        self.len() * mem::size_of::<Node>()
    }

    /// Bytes reserved for nodes.
    pub fn bytes_allocated(&self) -> usize {
        self.capacity() * mem::size_of::<Node>()
    }

    /// Iterates over every node in arena order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NodeId, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index as u32), node))
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::super::config::MAX_NODES;
    use super::*;

    #[test]
    fn starts_with_root_only() {
        let arena = NodeArena::new();
        assert_eq!(arena.len(), 1);
        assert!(!arena.is_empty());
        let root = arena.get(NodeId::ROOT);
        assert!(root.is_leaf());
        assert!(!root.is_terminal());
    }

    #[test]
    fn handles_are_sequential() {
        let mut arena = NodeArena::new();
        let ids: Vec<_> = (0..5).map(|_| arena.allocate().unwrap()).collect();
        let indices: Vec<_> = ids.iter().map(|id| id.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
        assert_eq!(arena.len(), 6);
    }

    #[test]
    fn first_growth_reserves_initial_capacity() {
        let config = TrieConfig::default().initial_capacity(16);
        let mut arena = NodeArena::with_config(&config);
        arena.allocate().unwrap();
        assert!(arena.capacity() >= 16);
    }

    #[test]
    fn capacity_at_least_doubles() {
        let config = TrieConfig::default().initial_capacity(4);
        let mut arena = NodeArena::with_config(&config);
        arena.allocate().unwrap();
        while arena.len() < arena.capacity() {
            arena.allocate().unwrap();
        }
        let before = arena.capacity();
        arena.allocate().unwrap();
        assert!(arena.capacity() >= before * 2);
    }

    #[test]
    fn handles_survive_growth() {
        let config = TrieConfig::default().initial_capacity(2);
        let mut arena = NodeArena::with_config(&config);
        let first = arena.allocate().unwrap();
        arena.get_mut(first).set_terminal();
        for _ in 0..100 {
            arena.allocate().unwrap();
        }
        assert!(arena.get(first).is_terminal());
        assert!(!arena.get(NodeId::ROOT).is_terminal());
    }

    #[test]
    fn growth_stops_at_node_limit() {
        let config = TrieConfig::default().initial_capacity(2).max_nodes(3);
        let mut arena = NodeArena::with_config(&config);
        arena.allocate().unwrap();
        arena.allocate().unwrap();
        assert_eq!(arena.allocate(), Err(TrieError::CapacityExceeded { limit: 3 }));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn failed_growth_is_allocation_failure() {
        let config = TrieConfig::default().initial_capacity(usize::MAX);
        let mut arena = NodeArena::with_config(&config);
        assert_eq!(
            arena.allocate(),
            Err(TrieError::AllocationFailure {
                requested: MAX_NODES
            })
        );
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn foreign_handle_is_not_found() {
        let arena = NodeArena::new();
        assert!(arena.try_get(NodeId::new(42)).is_none());
    }

    #[test]
    fn iteration_is_in_arena_order() {
        let mut arena = NodeArena::new();
        arena.allocate().unwrap();
        arena.allocate().unwrap();
        let order: Vec<_> = arena.iter().map(|(id, _)| id.index()).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn byte_accounting() {
        let arena = NodeArena::new();
        assert_eq!(arena.bytes_used(), mem::size_of::<Node>());
        assert!(arena.bytes_allocated() >= arena.bytes_used());
    }
}
