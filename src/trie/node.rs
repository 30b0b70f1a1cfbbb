use std::fmt;
use std::num::NonZeroU32;

use super::alphabet::{self, ALPHABET_SIZE};

/// A handle to a node inside a [`NodeArena`](super::NodeArena).
///
/// Handles are dense indices into the arena. They stay valid for the whole
/// lifetime of the arena that issued them, across any amount of growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, allocated when the arena is created.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Returns the position of this node in arena order.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// True if this is the root handle.
    #[inline]
    pub fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// The root is never a child, so child slots can use the zero niche as the
// absent marker.
type ChildSlot = Option<NonZeroU32>;

/// A node in the prefix tree.
///
/// One child slot per alphabet symbol, plus a flag telling whether an
/// inserted entry ends exactly here.
#[derive(Clone, PartialEq, Eq)]
pub struct Node {
    children: [ChildSlot; ALPHABET_SIZE],
    terminal: bool,
}

impl Node {
    /// Creates a node with every child slot absent.
    pub fn new() -> Self {
        Node {
            children: [None; ALPHABET_SIZE],
            terminal: false,
        }
    }

    /// Returns the child at alphabet `offset`, if one is linked.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below [`ALPHABET_SIZE`].
    #[inline]
    pub fn child(&self, offset: usize) -> Option<NodeId> {
        self.children[offset].map(|id| NodeId(id.get()))
    }

    /// Returns the child reached by `symbol`, or `None` if the symbol is not in
    /// the alphabet or the edge does not exist.
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<NodeId> {
        alphabet::offset(symbol).and_then(|offset| self.child(offset))
    }

    /// Links `child` at alphabet `offset`.
    ///
    /// The slot must be empty and `child` must not be the root.
    pub(crate) fn link(&mut self, offset: usize, child: NodeId) {
        debug_assert!(self.children[offset].is_none(), "slot already linked");
        self.children[offset] = NonZeroU32::new(child.0);
        debug_assert!(self.children[offset].is_some(), "root linked as a child");
    }

    /// True if an inserted entry ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn set_terminal(&mut self) {
        self.terminal = true;
    }

    /// Returns an iterator over `(symbol, child)` pairs in ascending alphabet order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        ChildIter {
            node: self,
            front: 0,
            back: ALPHABET_SIZE,
        }
    }

    /// Returns the number of linked children.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|slot| slot.is_some()).count()
    }

    /// True if no child is linked.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

// Printing all 95 slots is useless noise; only the linked ones matter.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("terminal", &self.terminal)
            .field(
                "children",
                &self
                    .children()
                    .map(|(symbol, id)| (symbol as char, id))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// An iterator over the linked children of a [`Node`].
///
/// Yields `(symbol, child)` in ascending alphabet order; iterating from the
/// back yields descending order.
#[derive(Clone)]
pub struct ChildIter<'n> {
    node: &'n Node,
    front: usize,
    back: usize,
}

impl Iterator for ChildIter<'_> {
    type Item = (u8, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.front < self.back {
            let offset = self.front;
            self.front += 1;
            if let Some(child) = self.node.child(offset) {
                return Some((alphabet::symbol(offset), child));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.back - self.front))
    }
}

impl DoubleEndedIterator for ChildIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.back > self.front {
            self.back -= 1;
            let offset = self.back;
            if let Some(child) = self.node.child(offset) {
                return Some((alphabet::symbol(offset), child));
            }
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn id(n: u32) -> NodeId {
        NodeId::new(n)
    }

    #[test]
    #[should_panic]
    fn child_offset_out_of_range() {
        Node::new().child(ALPHABET_SIZE);
    }

    #[test]
    fn no_children() {
        let n = Node::new();
        assert_eq!(n.children().next(), None);
        assert_eq!(n.child_count(), 0);
        assert!(n.is_leaf());
        assert!(!n.is_terminal());
    }

    #[test]
    fn children_come_out_sorted() {
        let mut n = Node::new();
        n.link(alphabet::offset(b't').unwrap(), id(3));
        n.link(alphabet::offset(b'a').unwrap(), id(1));
        n.link(alphabet::offset(b'r').unwrap(), id(2));
        let children: Vec<_> = n.children().collect();
        assert_eq!(children, vec![(b'a', id(1)), (b'r', id(2)), (b't', id(3))]);
        assert_eq!(n.child_count(), 3);
    }

    #[test]
    fn reverse_iteration_is_descending() {
        let mut n = Node::new();
        n.link(alphabet::offset(b' ').unwrap(), id(1));
        n.link(alphabet::offset(b'~').unwrap(), id(2));
        let children: Vec<_> = n.children().rev().collect();
        assert_eq!(children, vec![(b'~', id(2)), (b' ', id(1))]);
    }

    #[test]
    fn get_by_symbol() {
        let mut n = Node::new();
        n.link(alphabet::offset(b'x').unwrap(), id(7));
        assert_eq!(n.get(b'x'), Some(id(7)));
        assert_eq!(n.get(b'y'), None);
        assert_eq!(n.get(b'\n'), None);
    }

    #[test]
    fn terminal_flag() {
        let mut n = Node::new();
        n.set_terminal();
        assert!(n.is_terminal());
    }

    #[test]
    fn root_handle() {
        assert!(NodeId::ROOT.is_root());
        assert_eq!(NodeId::ROOT.index(), 0);
        assert!(!id(4).is_root());
        assert_eq!(id(4).to_string(), "4");
    }
}
