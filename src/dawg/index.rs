use std::fmt;

use super::arena::StateArena;
use super::builder::IntoWord;
use super::char_trait::DawgChar;
use super::state::{State, StateId};

/// An immutable, minimal DAWG.
///
/// Produced by [`Builder::finish`](super::Builder::finish) or
/// [`build_dawg`](super::builder::build_dawg). There is no way to mutate a
/// `Dawg`, so any number of threads can query it at once.
///
/// # Examples
///
/// ```
/// use prefix_dawg::dawg::builder::build_dawg;
///
/// let dawg = build_dawg(["cap", "cop", "tap", "top"]).unwrap();
/// assert!(dawg.contains("cap"));
/// assert!(!dawg.contains("ca"));
/// assert!(dawg.has_prefix("ca"));
/// assert_eq!(dawg.words_with_prefix("c"), ["cap", "cop"]);
/// assert!(dawg.words_with_prefix("z").is_empty());
/// ```
#[derive(Clone)]
pub struct Dawg<C: DawgChar> {
    states: StateArena<C>,
    root: StateId,
    word_count: usize,
    edge_count: usize,
}

impl<C: DawgChar> Dawg<C> {
    pub(crate) fn from_parts(
        states: StateArena<C>,
        root: StateId,
        word_count: usize,
        edge_count: usize,
    ) -> Self {
        Dawg {
            states,
            root,
            word_count,
            edge_count,
        }
    }

    /// Returns a view of the root node for label-by-label traversal.
    pub fn root(&self) -> Node<'_, C> {
        Node {
            states: &self.states,
            id: self.root,
        }
    }

    /// Follows `word` from the root and returns the state it ends in.
    fn walk(&self, word: &[C]) -> Option<StateId> {
        word.iter()
            .try_fold(self.root, |id, &label| self.states[id].transition(label))
    }

    /// Returns true if `word` is one of the inserted words.
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        self.walk(&word.collect_word())
            .is_some_and(|id| self.states[id].accepting())
    }

    /// Returns true if some inserted word starts with `prefix`.
    ///
    /// The empty prefix is trivially true, even for an empty DAWG.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        self.walk(&prefix.collect_word()).is_some()
    }

    /// Lazily enumerates every inserted word starting with `prefix`, in sorted order.
    ///
    /// Each item is the full word, prefix included. An unreachable prefix yields
    /// nothing.
    pub fn iter_prefix(&self, prefix: impl IntoWord<C>) -> Words<'_, C> {
        let prefix = prefix.collect_word();
        let start = self.walk(&prefix);
        Words {
            states: &self.states,
            start,
            path: prefix.into_vec(),
            stack: Vec::new(),
        }
    }

    /// Lazily enumerates every inserted word in sorted order.
    pub fn iter(&self) -> Words<'_, C> {
        Words {
            states: &self.states,
            start: Some(self.root),
            path: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Returns the number of distinct inserted words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the number of transitions kept after suffix sharing.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the number of states, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Iterates over every state of the automaton.
    pub fn states(&self) -> impl Iterator<Item = &State<C>> {
        self.states.iter()
    }
}

impl Dawg<char> {
    /// Returns every inserted word starting with `prefix`, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_dawg::dawg::builder::build_dawg;
    ///
    /// let dawg = build_dawg(["BAKE", "BAKED", "BAKER", "CAKE"]).unwrap();
    /// assert_eq!(dawg.words_with_prefix("BAKE"), ["BAKE", "BAKED", "BAKER"]);
    /// ```
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.iter_prefix(prefix)
            .map(|word| word.into_iter().collect())
            .collect()
    }
}

impl<C: DawgChar> fmt::Debug for Dawg<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dawg")
            .field("words", &self.word_count)
            .field("states", &self.states.len())
            .field("edges", &self.edge_count)
            .finish()
    }
}

impl<'a, C: DawgChar> IntoIterator for &'a Dawg<C> {
    type Item = Vec<C>;
    type IntoIter = Words<'a, C>;

    fn into_iter(self) -> Words<'a, C> {
        self.iter()
    }
}

/// A borrowed view of one state of a [`Dawg`].
#[derive(Clone, Copy)]
pub struct Node<'a, C: DawgChar> {
    states: &'a StateArena<C>,
    id: StateId,
}

impl<'a, C: DawgChar> Node<'a, C> {
    /// Returns the node that `label`'s transition leads to, or None if there is none.
    #[inline]
    pub fn get(self, label: C) -> Option<Node<'a, C>> {
        self.states[self.id].transition(label).map(|id| Node {
            states: self.states,
            id,
        })
    }

    /// True if this node corresponds to the end of a word.
    #[inline]
    pub fn is_word(self) -> bool {
        self.states[self.id].accepting()
    }

    /// Returns the id of the underlying state.
    pub fn id(self) -> StateId {
        self.id
    }

    /// Returns an iterator over the children of this node in label order.
    pub fn children(self) -> impl ExactSizeIterator<Item = (C, Node<'a, C>)> + 'a {
        let states = self.states;
        states[self.id]
            .transitions()
            .iter()
            .map(move |&(label, id)| (label, Node { states, id }))
    }

    /// Returns the number of children.
    pub fn child_count(self) -> usize {
        self.states[self.id].transition_count()
    }
}

impl<C: DawgChar> PartialEq for Node<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.states, other.states) && self.id == other.id
    }
}

impl<C: DawgChar> Eq for Node<'_, C> {}

impl<C: DawgChar> fmt::Debug for Node<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("word", &self.is_word())
            .field("children", &self.child_count())
            .finish()
    }
}

/// Depth-first iterator over the words below a state, in sorted order.
///
/// Cloning the iterator restarts nothing; it forks the traversal at its
/// current position. Call [`Dawg::iter`] or [`Dawg::iter_prefix`] again to
/// start over.
#[derive(Clone)]
pub struct Words<'a, C: DawgChar> {
    states: &'a StateArena<C>,
    /// The state to enter on the first call to `next`.
    start: Option<StateId>,
    /// Labels spelling the word at the top of `stack`.
    path: Vec<C>,
    /// States being visited, each with the index of its next unexplored transition.
    stack: Vec<(StateId, usize)>,
}

impl<C: DawgChar> Iterator for Words<'_, C> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Vec<C>> {
        if let Some(start) = self.start.take() {
            self.stack.push((start, 0));
            if self.states[start].accepting() {
                return Some(self.path.clone());
            }
        }

        while let Some(&(id, next)) = self.stack.last() {
            match self.states[id].transitions().get(next) {
                Some(&(label, child)) => {
                    let top = self.stack.len() - 1;
                    self.stack[top].1 = next + 1;
                    self.stack.push((child, 0));
                    self.path.push(label);
                    if self.states[child].accepting() {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // The start state's labels are the prefix and stay put.
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
        None
    }
}

impl<C: DawgChar> std::iter::FusedIterator for Words<'_, C> {}

#[cfg(test)]
mod test {
    use super::super::builder::build_dawg;
    use super::*;

    fn scenario() -> Dawg<char> {
        build_dawg(["cap", "cop", "tap", "top"]).unwrap()
    }

    #[test]
    fn membership() {
        let dawg = scenario();
        for word in ["cap", "cop", "tap", "top"] {
            assert!(dawg.contains(word), "{word}");
        }
        for word in ["ca", "c", "", "caps", "CAP", "cat", "tip", "zap"] {
            assert!(!dawg.contains(word), "{word}");
        }
    }

    #[test]
    fn prefixes() {
        let dawg = scenario();
        for prefix in ["", "c", "ca", "cap", "t", "to", "top"] {
            assert!(dawg.has_prefix(prefix), "{prefix}");
        }
        for prefix in ["z", "cx", "caps", "C"] {
            assert!(!dawg.has_prefix(prefix), "{prefix}");
        }
    }

    #[test]
    fn empty_prefix_on_empty_dawg() {
        let dawg = build_dawg::<char, &str>([]).unwrap();
        assert!(dawg.has_prefix(""));
        assert!(dawg.words_with_prefix("").is_empty());
        assert_eq!(dawg.iter().next(), None);
    }

    #[test]
    fn words_with_prefix_scenario() {
        let dawg = scenario();
        assert_eq!(dawg.words_with_prefix("c"), ["cap", "cop"]);
        assert_eq!(dawg.words_with_prefix("t"), ["tap", "top"]);
        assert_eq!(dawg.words_with_prefix("cap"), ["cap"]);
        assert!(dawg.words_with_prefix("z").is_empty());
        assert!(dawg.words_with_prefix("capx").is_empty());
        assert_eq!(dawg.words_with_prefix(""), ["cap", "cop", "tap", "top"]);
    }

    #[test]
    fn enumeration_is_sorted_and_includes_prefix_word() {
        let words = ["BAKE", "BAKED", "BAKER", "BAKERY", "CAKE", "CAKED", "FAKE", "LAKE"];
        let dawg = build_dawg(words).unwrap();
        assert_eq!(
            dawg.words_with_prefix("BAKE"),
            ["BAKE", "BAKED", "BAKER", "BAKERY"]
        );
        let all: Vec<String> = dawg.iter().map(|w| w.into_iter().collect()).collect();
        assert_eq!(all, words);
    }

    #[test]
    fn queries_are_idempotent() {
        let dawg = scenario();
        let first = (dawg.contains("cap"), dawg.has_prefix("to"), dawg.words_with_prefix("c"));
        for _ in 0..3 {
            let again = (dawg.contains("cap"), dawg.has_prefix("to"), dawg.words_with_prefix("c"));
            assert_eq!(first, again);
        }
    }

    #[test]
    fn cloned_iterator_continues_independently() {
        let dawg = scenario();
        let mut words = dawg.iter_prefix("c");
        assert_eq!(words.next(), Some(vec!['c', 'a', 'p']));
        let fork = words.clone();
        assert_eq!(words.collect::<Vec<_>>(), [vec!['c', 'o', 'p']]);
        assert_eq!(fork.collect::<Vec<_>>(), [vec!['c', 'o', 'p']]);
    }

    #[test]
    fn generic_enumeration() {
        let dawg: Dawg<u8> = build_dawg([[1, 2], [1, 3], [2, 3]]).unwrap();
        let words: Vec<Vec<u8>> = dawg.iter_prefix([1u8]).collect();
        assert_eq!(words, [vec![1, 2], vec![1, 3]]);
        let all: Vec<Vec<u8>> = (&dawg).into_iter().collect();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn node_traversal() {
        let dawg = build_dawg(["TEST", "TESTER", "WTEST"]).unwrap();
        let root = dawg.root();

        let n = root.get('T').unwrap();
        assert!(!n.is_word());
        let n = n.get('E').unwrap().get('S').unwrap().get('T').unwrap();
        assert!(n.is_word());
        let n = n.get('E').unwrap();
        assert!(!n.is_word());
        let n = n.get('R').unwrap();
        assert!(n.is_word());
        assert_eq!(n.get('T'), None);

        let labels: Vec<char> = root.children().map(|(ch, _)| ch).collect();
        assert_eq!(labels, ['T', 'W']);
        assert_eq!(root.child_count(), 2);
        assert_eq!(root.id().index(), dawg.state_count() - 1);
    }

    #[test]
    fn dawg_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dawg<char>>();
        assert_send_sync::<Dawg<u8>>();
    }

    #[test]
    fn concurrent_queries() {
        let dawg = scenario();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert!(dawg.contains("top"));
                    assert_eq!(dawg.words_with_prefix("t"), ["tap", "top"]);
                });
            }
        });
    }

    #[test]
    fn debug_output_summarizes() {
        let dawg = scenario();
        assert_eq!(
            format!("{dawg:?}"),
            "Dawg { words: 4, states: 4, edges: 5 }"
        );
    }
}
