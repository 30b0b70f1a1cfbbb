/// The printable ASCII alphabet every edge is labelled with.
pub mod alphabet;
/// Entry conversion and trie construction from iterators, readers and files.
pub mod builder;
/// Arena sizing configuration.
pub mod config;
/// Graphviz output for whole tries and subtrees.
pub mod dot;
/// Error types.
pub mod error;
/// Node handles, nodes and child iteration.
pub mod node;
/// Handle-addressed node storage.
pub mod node_arena;
/// The trie itself, owning its arena.
pub mod owned;
/// Invocation of an external graph renderer.
pub mod render;
/// Ordered enumeration of stored entries.
pub mod suggest;

pub use builder::{BuildReport, IntoEntry, TrieBuilder};
pub use config::TrieConfig;
pub use dot::Dot;
pub use error::{LoadError, TrieError};
pub use node::{Node, NodeId};
pub use node_arena::NodeArena;
pub use owned::{Subtree, Trie};
pub use render::{Graphviz, RenderError, Renderer};
