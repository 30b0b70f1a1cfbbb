//! Graphviz `digraph` descriptions of a trie.
//!
//! The output format is consumed verbatim by the external renderer:
//!
//! ```text
//! digraph Trie {
//! 	node [fillcolor=lightblue,style=filled,arrowhead=vee,color=black]
//! 	Node_0 [label=root]
//! 	Node_1 [label=a,fillcolor=lightgreen]
//! 	Node_0 -> Node_1 [label=a]
//! }
//! ```
//!
//! Every child gets one node declaration, followed by the edge from its
//! parent. Terminal nodes are drawn green. Labels are written unquoted.

use std::fmt;

use super::node::NodeId;
use super::node_arena::NodeArena;

/// Label of the top node when no prefix is given.
pub const DEFAULT_ROOT_LABEL: &str = "root";

const NODE_STYLE: &str = "node [fillcolor=lightblue,style=filled,arrowhead=vee,color=black]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scope {
    /// Every node, in arena order.
    Whole,
    /// Nodes reachable from a root, depth-first in alphabet order.
    Subtree(NodeId),
}

/// A lazily formatted graph description.
///
/// Nothing is traversed until the value is displayed, e.g. with
/// `to_string()` or `write!`.
///
/// ```
/// use libtrie::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("a").unwrap();
/// let dot = trie.to_dot().to_string();
/// assert!(dot.contains("\tNode_0 -> Node_1 [label=a]\n"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Dot<'a> {
    arena: &'a NodeArena,
    scope: Scope,
    label: Option<&'a str>,
}

impl<'a> Dot<'a> {
    /// Describes every node of `arena`, visiting nodes in arena order.
    pub fn whole(arena: &'a NodeArena) -> Self {
        Dot {
            arena,
            scope: Scope::Whole,
            label: None,
        }
    }

    /// Describes the nodes reachable from `root`, depth-first with children in
    /// ascending alphabet order.
    pub fn subtree(arena: &'a NodeArena, root: NodeId) -> Self {
        Dot {
            arena,
            scope: Scope::Subtree(root),
            label: None,
        }
    }

    /// Sets the label of the top node. Defaults to [`DEFAULT_ROOT_LABEL`].
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    fn top(&self) -> NodeId {
        match self.scope {
            Scope::Whole => NodeId::ROOT,
            Scope::Subtree(root) => root,
        }
    }

    fn write_child(
        &self,
        f: &mut fmt::Formatter<'_>,
        parent: NodeId,
        symbol: u8,
        child: NodeId,
    ) -> fmt::Result {
        let symbol = char::from(symbol);
        if self.arena.get(child).is_terminal() {
            writeln!(f, "\tNode_{child} [label={symbol},fillcolor=lightgreen]")?;
        } else {
            writeln!(f, "\tNode_{child} [label={symbol}]")?;
        }
        writeln!(f, "\tNode_{parent} -> Node_{child} [label={symbol}]")
    }

    fn write_whole(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (parent, node) in self.arena.iter() {
            for (symbol, child) in node.children() {
                self.write_child(f, parent, symbol, child)?;
            }
        }
        Ok(())
    }

    fn write_subtree(&self, f: &mut fmt::Formatter<'_>, root: NodeId) -> fmt::Result {
        // Pending edges; a child's subtree is written before its next sibling.
        let mut stack = Vec::new();
        let push_children = |stack: &mut Vec<(NodeId, u8, NodeId)>, parent: NodeId| {
            stack.extend(
                self.arena
                    .get(parent)
                    .children()
                    .rev()
                    .map(|(symbol, child)| (parent, symbol, child)),
            );
        };

        push_children(&mut stack, root);
        while let Some((parent, symbol, child)) = stack.pop() {
            self.write_child(f, parent, symbol, child)?;
            push_children(&mut stack, child);
        }
        Ok(())
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph Trie {{")?;
        writeln!(f, "\t{NODE_STYLE}")?;
        writeln!(
            f,
            "\tNode_{} [label={}]",
            self.top(),
            self.label.unwrap_or(DEFAULT_ROOT_LABEL)
        )?;
        match self.scope {
            Scope::Whole => self.write_whole(f)?,
            Scope::Subtree(root) => self.write_subtree(f, root)?,
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod test {
    use super::super::Trie;
    use super::*;

    const HEADER: &str = "digraph Trie {\n\
        \tnode [fillcolor=lightblue,style=filled,arrowhead=vee,color=black]\n";

    fn trie_of(entries: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for entry in entries {
            trie.insert(*entry).unwrap();
        }
        trie
    }

    #[test]
    fn root_only_has_no_edges() {
        let trie = Trie::new();
        let dot = Dot::whole(trie.arena()).to_string();
        assert_eq!(dot, format!("{HEADER}\tNode_0 [label=root]\n}}\n"));
        assert!(!dot.contains("->"));
    }

    #[test]
    fn whole_tree_in_arena_order() {
        // Arena: 0 root, 1 b, 2 a, 3 c (under a).
        let trie = trie_of(&["b", "ac"]);
        let expected = format!(
            "{HEADER}\
             \tNode_0 [label=root]\n\
             \tNode_2 [label=a]\n\
             \tNode_0 -> Node_2 [label=a]\n\
             \tNode_1 [label=b,fillcolor=lightgreen]\n\
             \tNode_0 -> Node_1 [label=b]\n\
             \tNode_3 [label=c,fillcolor=lightgreen]\n\
             \tNode_2 -> Node_3 [label=c]\n\
             }}\n"
        );
        assert_eq!(Dot::whole(trie.arena()).to_string(), expected);
    }

    #[test]
    fn subtree_is_depth_first() {
        // Arena: 0 root, 1 a, 2 b, 3 c, 4 d (under a), 5 e (under d).
        let trie = trie_of(&["abc", "ade"]);
        let a = trie.resolve_from(NodeId::ROOT, "a").unwrap();
        let expected = format!(
            "{HEADER}\
             \tNode_1 [label=a]\n\
             \tNode_2 [label=b]\n\
             \tNode_1 -> Node_2 [label=b]\n\
             \tNode_3 [label=c,fillcolor=lightgreen]\n\
             \tNode_2 -> Node_3 [label=c]\n\
             \tNode_4 [label=d]\n\
             \tNode_1 -> Node_4 [label=d]\n\
             \tNode_5 [label=e,fillcolor=lightgreen]\n\
             \tNode_4 -> Node_5 [label=e]\n\
             }}\n"
        );
        assert_eq!(Dot::subtree(trie.arena(), a).label("a").to_string(), expected);
    }

    #[test]
    fn subtree_excludes_unreachable_nodes() {
        let trie = trie_of(&["ab", "xy"]);
        let a = trie.resolve_from(NodeId::ROOT, "a").unwrap();
        let dot = Dot::subtree(trie.arena(), a).to_string();
        assert!(dot.contains("label=b"));
        assert!(!dot.contains("label=x"));
        assert!(!dot.contains("label=y"));
        assert_eq!(dot.matches("->").count(), 1);
    }

    #[test]
    fn leaf_subtree_has_only_header() {
        let trie = trie_of(&["a"]);
        let a = trie.resolve_from(NodeId::ROOT, "a").unwrap();
        assert_eq!(
            Dot::subtree(trie.arena(), a).label("a").to_string(),
            format!("{HEADER}\tNode_1 [label=a]\n}}\n")
        );
    }

    #[test]
    fn one_declaration_per_edge() {
        let trie = trie_of(&["car", "cat", "cart", "dog"]);
        let whole = Dot::whole(trie.arena()).to_string();
        let subtree = Dot::subtree(trie.arena(), NodeId::ROOT).to_string();
        let edges = trie.node_count() - 1;
        for dot in [whole, subtree] {
            assert_eq!(dot.matches(" -> ").count(), edges);
            assert_eq!(dot.matches("\tNode_").count(), 2 * edges + 1);
        }
    }
}
