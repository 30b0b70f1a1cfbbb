//! Depth-first enumeration of the entries stored below a node.

use super::node::NodeId;
use super::node_arena::NodeArena;

struct Frame {
    node: NodeId,
    /// Length of the path above this node.
    depth: usize,
    /// Symbol on the edge into this node; `None` for the start node.
    symbol: Option<u8>,
}

/// Calls `f` with every entry stored in the subtree rooted at `start`.
///
/// Each entry is reported as `prefix` followed by the symbols from `start` to
/// the terminal node. Children are visited in ascending alphabet order, so the
/// entries come out sorted. `start` itself is reported first if it is
/// terminal.
///
/// The walk uses an explicit stack, so arbitrarily long entries cannot
/// overflow the call stack.
pub fn for_each_suggestion(
    arena: &NodeArena,
    start: NodeId,
    prefix: &str,
    mut f: impl FnMut(&str),
) {
    let mut path = String::from(prefix);
    let mut stack = vec![Frame {
        node: start,
        depth: path.len(),
        symbol: None,
    }];

    while let Some(Frame {
        node,
        depth,
        symbol,
    }) = stack.pop()
    {
        path.truncate(depth);
        if let Some(symbol) = symbol {
            path.push(char::from(symbol));
        }

        let node = arena.get(node);
        if node.is_terminal() {
            f(&path);
        }

        // Pushed in reverse so the smallest symbol is popped first.
        let depth = path.len();
        stack.extend(node.children().rev().map(|(symbol, child)| Frame {
            node: child,
            depth,
            symbol: Some(symbol),
        }));
    }
}

/// Returns every entry stored in the subtree rooted at `start`, in alphabet
/// order, each prefixed with `prefix`.
///
/// See [`for_each_suggestion`] for the traversal order.
pub fn suggestions(arena: &NodeArena, start: NodeId, prefix: &str) -> Vec<String> {
    let mut found = Vec::new();
    for_each_suggestion(arena, start, prefix, |entry| found.push(entry.to_owned()));
    found
}

#[cfg(test)]
mod test {
    use super::super::Trie;
    use super::*;

    fn trie_of(entries: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for entry in entries {
            trie.insert(*entry).unwrap();
        }
        trie
    }

    #[test]
    fn scenario_from_prefix() {
        let trie = trie_of(&["cat", "car", "dog"]);
        let ca = trie.resolve_from(NodeId::ROOT, "ca").unwrap();
        assert_eq!(suggestions(trie.arena(), ca, "ca"), ["car", "cat"]);
        let d = trie.resolve_from(NodeId::ROOT, "do").unwrap();
        assert_eq!(suggestions(trie.arena(), d, "do"), ["dog"]);
    }

    #[test]
    fn start_node_reported_first() {
        let trie = trie_of(&["BAKER", "BAKE", "BAKED"]);
        let bake = trie.resolve_from(NodeId::ROOT, "BAKE").unwrap();
        assert_eq!(
            suggestions(trie.arena(), bake, "BAKE"),
            ["BAKE", "BAKED", "BAKER"]
        );
    }

    #[test]
    fn prefix_is_taken_verbatim() {
        let trie = trie_of(&["ab", "ac"]);
        let a = trie.resolve_from(NodeId::ROOT, "a").unwrap();
        assert_eq!(suggestions(trie.arena(), a, ">"), [">b", ">c"]);
    }

    #[test]
    fn no_terminal_gives_nothing() {
        let trie = Trie::new();
        assert!(suggestions(trie.arena(), NodeId::ROOT, "").is_empty());
    }

    #[test]
    fn sibling_branches_do_not_leak_path() {
        let trie = trie_of(&["abcd", "ax", "b"]);
        assert_eq!(
            suggestions(trie.arena(), NodeId::ROOT, ""),
            ["abcd", "ax", "b"]
        );
    }

    #[test]
    fn alphabet_order_not_insertion_order() {
        let trie = trie_of(&["~", "a", "A", " ", "0"]);
        assert_eq!(
            suggestions(trie.arena(), NodeId::ROOT, ""),
            [" ", "0", "A", "a", "~"]
        );
    }

    #[test]
    fn deep_entry_does_not_recurse() {
        let long = "x".repeat(20_000);
        let trie = trie_of(&[long.as_str()]);
        let found = suggestions(trie.arena(), NodeId::ROOT, "");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].len(), 20_000);
    }

    #[test]
    fn callback_sees_each_entry_once() {
        let trie = trie_of(&["a", "ab", "abc"]);
        let mut seen = 0;
        for_each_suggestion(trie.arena(), NodeId::ROOT, "", |_| seen += 1);
        assert_eq!(seen, 3);
    }
}
