//! # prefix-dawg
//!
//! A compact [DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (Directed Acyclic Word Graph) for membership, prefix and prefix-enumeration
//! queries over a fixed vocabulary.
//!
//! A DAWG is a minimal acyclic finite-state automaton: a trie whose identical
//! suffixes are shared. This crate builds it in a single pass over sorted input,
//! following the incremental algorithm of
//! [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1): only the path of
//! the most recent word is ever unfinished, and everything behind it is
//! deduplicated against a registry of state signatures as soon as the next word
//! moves past it.
//!
//! ## Features
//!
//! - **Generic over label type**: works with `char`, `u8`, `u16`, or any type implementing
//!   [`DawgChar`](dawg::DawgChar)
//! - **Minimal**: equivalent states are merged during construction
//! - **Sorted enumeration**: words come out in lexicographic order
//! - **Immutable after construction**: a finished [`Dawg`](dawg::Dawg) is `Send + Sync`
//!
//! ## Quick Start
//!
//! ```
//! use prefix_dawg::dawg::build_dawg;
//!
//! let dawg = build_dawg(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
//! assert!(dawg.contains("CAKE"));
//! assert!(!dawg.contains("AKE"));
//! assert!(dawg.has_prefix("MA"));
//! assert_eq!(dawg.words_with_prefix("L"), ["LAKE"]);
//!
//! // Node-level traversal
//! let root = dawg.root();
//! let is_word = |w: &str| w.chars().try_fold(root, |n, ch| n.get(ch)).is_some_and(|n| n.is_word());
//! assert!(is_word("FAKE"));
//! ```
//!
//! ## Streaming construction
//!
//! ```
//! use prefix_dawg::dawg::Builder;
//!
//! let mut builder = Builder::new();
//! for word in ["cap", "cop", "tap", "top"] {
//!     builder.insert(word).unwrap();
//! }
//! let dawg = builder.finish();
//! assert_eq!(dawg.edge_count(), 5);
//! ```
//!
//! ## Generic Usage
//!
//! ```
//! use prefix_dawg::dawg::build_dawg;
//!
//! let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
//! let dawg = build_dawg(words).unwrap();
//! assert!(dawg.contains([1, 2, 3]));
//! assert!(!dawg.contains([1, 2, 5]));
//! ```

#![warn(missing_docs)]

/// Core DAWG data structure: states, builder, queries and word-list loading.
pub mod dawg;

#[cfg(test)]
mod test {
    use super::dawg::build_dawg;

    #[test]
    fn add_word() {
        let dawg = build_dawg(["TEST", "TESTER", "WTEST"]).unwrap();
        let root = dawg.root();

        let n = root.get('T').unwrap();
        assert!(!n.is_word());

        let n = n.get('E').unwrap();
        assert!(!n.is_word());

        let n = n.get('S').unwrap();
        assert!(!n.is_word());

        let n = n.get('T').unwrap();
        assert!(n.is_word());

        let n = n.get('E').unwrap();
        assert!(!n.is_word());

        let n = n.get('R').unwrap();
        assert!(n.is_word());

        let n = n.get('T');
        assert_eq!(n, None);

        // "TESTER" and "WTEST" share their final state.
        let tester = "TESTER".chars().try_fold(root, |n, ch| n.get(ch));
        let wtest = "WTEST".chars().try_fold(root, |n, ch| n.get(ch));
        assert!(tester.is_some());
        assert_eq!(tester, wtest);
    }
}
