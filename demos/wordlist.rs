//! Example: autocompletion and graph export over a small word list.
//!
//! Builds a trie, answers a few prefix queries and prints the Graphviz
//! description of one subtree. Pipe the graph section into `dot -Tsvg` to
//! draw it.
//!
//! Run with: cargo run --example wordlist

use libtrie::trie::builder::build_trie;

fn main() {
    let words = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"];
    let trie = build_trie(words).unwrap();

    // Word lookup
    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if trie.contains(word) { "yes" } else { "no" });
    }

    // Autocompletion
    println!("\nCompletions:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        match trie.complete(prefix) {
            Ok(found) => println!("  {prefix}*: {found:?}"),
            Err(err) => println!("  {prefix}*: {err}"),
        }
    }

    println!("\nAll words: {:?}", trie.entries());
    println!(
        "Nodes: {} ({} bytes)",
        trie.node_count(),
        trie.arena().bytes_used()
    );

    // Graph of everything below "BAKE"
    let bake = trie.resolve("BAKE").unwrap();
    println!("\n{}", bake.to_dot());
}
