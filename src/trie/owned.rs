use std::fmt;

use smallvec::SmallVec;

use super::alphabet;
use super::builder::IntoEntry;
use super::config::TrieConfig;
use super::dot::Dot;
use super::error::{Result, TrieError};
use super::node::{Node, NodeId};
use super::node_arena::NodeArena;
use super::suggest;

/// A prefix tree that owns its node arena.
///
/// Entries are strings over the printable ASCII alphabet. Shared prefixes are
/// stored once; the node an entry ends at is marked terminal.
///
/// # Examples
///
/// ```
/// use libtrie::trie::Trie;
///
/// let mut trie = Trie::new();
/// for word in ["cat", "car", "dog"] {
///     trie.insert(word).unwrap();
/// }
///
/// let ca = trie.resolve("ca").unwrap();
/// assert_eq!(ca.suggestions(), ["car", "cat"]);
/// assert!(trie.resolve("xyz").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Trie {
    arena: NodeArena,
}

impl Trie {
    /// Creates an empty trie with default sizing.
    pub fn new() -> Self {
        Trie {
            arena: NodeArena::new(),
        }
    }

    /// Creates an empty trie.
    pub fn with_config(config: &TrieConfig) -> Self {
        Trie {
            arena: NodeArena::with_config(config),
        }
    }

    /// Returns the handle of the root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Returns the node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this trie.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    /// Returns the backing arena.
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Returns the number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Inserts `entry` below the root and returns the node it ends at.
    ///
    /// Inserting an entry twice is a no-op the second time. The empty entry
    /// marks the root itself as terminal.
    ///
    /// # Errors
    ///
    /// * [`TrieError::InvalidSymbol`] if the entry contains a byte outside the
    ///   alphabet. The trie is left untouched.
    /// * [`TrieError::CapacityExceeded`] or [`TrieError::AllocationFailure`] if
    ///   a node could not be allocated. Nodes linked before the failure stay
    ///   valid, but the entry is not stored.
    pub fn insert(&mut self, entry: impl IntoEntry) -> Result<NodeId> {
        self.insert_from(NodeId::ROOT, entry)
    }

    /// Inserts `entry` below `root` and returns the node it ends at.
    ///
    /// See [`insert`](Trie::insert) for the error conditions.
    pub fn insert_from(&mut self, root: NodeId, entry: impl IntoEntry) -> Result<NodeId> {
        let entry = entry.collect_entry();

        // Validate everything up front so a bad entry never leaves a partial path.
        let offsets = entry
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                alphabet::offset(symbol).ok_or(TrieError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<SmallVec<[usize; 32]>>>()?;

        let mut current = root;
        for offset in offsets {
            current = match self.arena.get(current).child(offset) {
                Some(child) => child,
                None => {
                    let child = self.arena.allocate()?;
                    self.arena.get_mut(current).link(offset, child);
                    child
                }
            };
        }
        self.arena.get_mut(current).set_terminal();
        Ok(current)
    }

    /// Walks `prefix` down from `root` without modifying anything.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::PrefixNotFound`] if the path runs into a missing
    /// edge or a symbol outside the alphabet.
    pub fn resolve_from(&self, root: NodeId, prefix: &str) -> Result<NodeId> {
        prefix
            .bytes()
            .try_fold(root, |node, symbol| self.arena.get(node).get(symbol))
            .ok_or_else(|| TrieError::prefix_not_found(prefix))
    }

    /// Finds the subtree holding every entry that starts with `prefix`.
    ///
    /// The returned [`Subtree`] carries the matched prefix, so it can feed both
    /// suggestion enumeration and graph export without resolving again.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::PrefixNotFound`] if no stored path spells `prefix`.
    pub fn resolve(&self, prefix: &str) -> Result<Subtree<'_>> {
        let node = self.resolve_from(NodeId::ROOT, prefix)?;
        Ok(Subtree {
            trie: self,
            node,
            prefix: prefix.to_owned(),
        })
    }

    /// Returns true if `entry` was inserted.
    pub fn contains(&self, entry: &str) -> bool {
        self.resolve_from(NodeId::ROOT, entry)
            .is_ok_and(|node| self.arena.get(node).is_terminal())
    }

    /// Returns every stored entry starting with `prefix`, in alphabet order.
    pub fn complete(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self.resolve(prefix)?.suggestions())
    }

    /// Returns every stored entry, in alphabet order.
    pub fn entries(&self) -> Vec<String> {
        suggest::suggestions(&self.arena, NodeId::ROOT, "")
    }

    /// Returns a graph description of the whole trie, in arena order.
    ///
    /// The root is labelled `root`.
    pub fn to_dot(&self) -> Dot<'_> {
        Dot::whole(&self.arena)
    }
}

/// The result of a successful prefix lookup: a node plus the text that led
/// to it.
#[derive(Clone)]
pub struct Subtree<'t> {
    trie: &'t Trie,
    node: NodeId,
    prefix: String,
}

impl<'t> Subtree<'t> {
    /// Returns the handle of the node the prefix ends at.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Returns the matched prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// True if the prefix itself is a stored entry.
    pub fn is_terminal(&self) -> bool {
        self.trie.node(self.node).is_terminal()
    }

    /// Returns every stored entry starting with the prefix, in alphabet order.
    pub fn suggestions(&self) -> Vec<String> {
        suggest::suggestions(self.trie.arena(), self.node, &self.prefix)
    }

    /// Calls `f` with every stored entry starting with the prefix, in
    /// alphabet order.
    pub fn for_each_suggestion(&self, f: impl FnMut(&str)) {
        suggest::for_each_suggestion(self.trie.arena(), self.node, &self.prefix, f)
    }

    /// Returns a graph description of this subtree, labelled with the prefix.
    ///
    /// The empty prefix matches the root, which is described like
    /// [`Trie::to_dot`].
    pub fn to_dot(&self) -> Dot<'_> {
        if self.node.is_root() {
            return Dot::whole(self.trie.arena());
        }
        Dot::subtree(self.trie.arena(), self.node).label(&self.prefix)
    }
}

impl fmt::Debug for Subtree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subtree")
            .field("node", &self.node)
            .field("prefix", &self.prefix)
            .finish()
    }
}
