//! Example: building a DAWG and querying it.
//!
//! Shows word lookup, prefix checks, prefix enumeration and walking the graph
//! node by node.
//!
//! Run with: cargo run --example wordlist

use prefix_dawg::dawg::{build_dawg, Node};

/// Prints every word below `node`, reusing one label buffer for the path.
fn print_words(node: Node<'_, char>, path: &mut String) {
    if node.is_word() {
        println!("  {path}");
    }
    for (ch, child) in node.children() {
        path.push(ch);
        print_words(child, path);
        path.pop();
    }
}

fn main() {
    let words = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"];
    let dawg = build_dawg(words).unwrap();

    // Word lookup
    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if dawg.contains(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        println!("  {prefix}*: {}", if dawg.has_prefix(prefix) { "yes" } else { "no" });
    }

    // Prefix enumeration
    println!("\nWords starting with BAK: {:?}", dawg.words_with_prefix("BAK"));

    // Node-level walk
    println!("\nAll words:");
    print_words(dawg.root(), &mut String::new());

    println!(
        "\n{} words, {} states, {} edges (a plain trie needs {} edges)",
        dawg.word_count(),
        dawg.state_count(),
        dawg.edge_count(),
        words.iter().map(|w| w.len()).sum::<usize>()
    );
}
