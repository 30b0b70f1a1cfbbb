//! # libtrie
//!
//! An arena-backed [prefix tree](https://en.wikipedia.org/wiki/Trie) over the
//! printable ASCII alphabet, with autocompletion and Graphviz export.
//!
//! Every node lives in a single growable arena and is addressed by a stable
//! integer handle. Shared prefixes are stored once; a node is marked terminal
//! when an inserted entry ends there.
//!
//! ## Features
//!
//! - **Autocomplete**: list every stored entry starting with a prefix, in
//!   alphabet order
//! - **Graph export**: describe the whole trie, or the subtree below a prefix,
//!   as a Graphviz `digraph`
//! - **Bounded growth**: the arena reports allocation failures and a
//!   configurable node limit instead of aborting
//! - **No recursion**: traversals use explicit stacks, so long entries cannot
//!   overflow the call stack
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::builder::build_trie;
//!
//! let trie = build_trie(["cat", "car", "dog"]).unwrap();
//!
//! let ca = trie.resolve("ca").unwrap();
//! assert_eq!(ca.suggestions(), ["car", "cat"]);
//! assert!(trie.resolve("xyz").is_err());
//! ```
//!
//! The same resolved prefix feeds graph export:
//!
//! ```
//! use libtrie::trie::builder::build_trie;
//!
//! let trie = build_trie(["cat", "car"]).unwrap();
//! let dot = trie.resolve("ca").unwrap().to_dot().to_string();
//! assert!(dot.starts_with("digraph Trie {\n"));
//! assert!(dot.contains("\tNode_2 [label=ca]\n"));
//! assert!(dot.contains("\tNode_4 [label=r,fillcolor=lightgreen]\n"));
//! ```

#![warn(missing_docs)]

/// Core prefix tree: arena, insertion, lookup, enumeration and export.
pub mod trie;
