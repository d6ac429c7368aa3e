use std::cmp::Ordering;

use hashbrown::HashMap;
use smallvec::SmallVec;

use super::arena::StateArena;
use super::char_trait::DawgChar;
use super::error::DawgError;
use super::index::Dawg;
use super::state::{Signature, State, StateId};

/// A word that can be inserted into a [`Builder`] or looked up in a [`Dawg`].
///
/// String types yield their `char`s. Slices, vectors and arrays yield their
/// elements, so a `Dawg<u8>` is queried with `&[u8]` or `[u8; N]`.
pub trait IntoWord<C: DawgChar> {
    /// Copies the labels of this word into a buffer.
    fn collect_word(self) -> SmallVec<[C; 32]>;
}

macro_rules! str_word {
    ($($ty:ty),*) => {$(
        impl IntoWord<char> for $ty {
            fn collect_word(self) -> SmallVec<[char; 32]> {
                self.chars().collect()
            }
        }
    )*};
}

str_word!(&str, &&str, String, &String, Box<str>);

impl<C: DawgChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        SmallVec::from_slice(self)
    }
}

impl<C: DawgChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        SmallVec::from_slice(self)
    }
}

impl<C: DawgChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        SmallVec::from_vec(self)
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        SmallVec::from_slice(&self)
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        SmallVec::from_slice(self)
    }
}

/// A state on the previous word's path that may still gain transitions.
struct Pending<C: DawgChar> {
    label: C,
    state: State<C>,
}

/// A builder for constructing a minimal DAWG incrementally.
///
/// Words must be added in lexicographically sorted order. The states along the
/// most recently inserted word stay in the builder's frontier; everything off
/// that path is finalized and deduplicated through a signature registry, so the
/// graph stays minimal after every insertion.
///
/// [`finish`](Builder::finish) consumes the builder and returns the immutable
/// [`Dawg`].
///
/// # Examples
///
/// ```
/// use prefix_dawg::dawg::Builder;
///
/// let mut builder = Builder::new();
/// builder.insert("CAP").unwrap();
/// builder.insert("CAT").unwrap();
/// assert!(builder.insert("BAT").is_err());
/// let dawg = builder.finish();
/// assert!(dawg.contains("CAT"));
/// assert!(!dawg.contains("BAT"));
/// ```
pub struct Builder<C: DawgChar> {
    arena: StateArena<C>,
    registry: HashMap<Signature<C>, StateId>,
    root: State<C>,
    frontier: Vec<Pending<C>>,
    previous_word: SmallVec<[C; 32]>,
    word_count: usize,
    edge_count: usize,
}

impl<C: DawgChar> Builder<C> {
    /// Creates a builder for an empty DAWG.
    pub fn new() -> Self {
        Builder {
            arena: StateArena::new(),
            registry: HashMap::new(),
            root: State::new(false),
            frontier: Vec::new(),
            previous_word: SmallVec::new(),
            word_count: 0,
            edge_count: 0,
        }
    }

    /// Adds a word to the DAWG being constructed.
    ///
    /// The word can be any type that implements [`IntoWord`], including `&str`,
    /// `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`.
    ///
    /// Returns `Ok(true)` if the word was added and `Ok(false)` if it repeats the
    /// previous word, which leaves the builder untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DawgError::OutOfOrder`] if the word sorts before the previously
    /// added word. The builder is left unchanged and keeps accepting words.
    ///
    /// # Panics
    ///
    /// Panics if finalizing the previous word's path needs a state beyond
    /// [`StateId::MAX_INDEX`].
    pub fn insert(&mut self, word: impl IntoWord<C>) -> Result<bool, DawgError<C>> {
        let word = word.collect_word();
        self.insert_slice(&word)
    }

    fn insert_slice(&mut self, word: &[C]) -> Result<bool, DawgError<C>> {
        if self.word_count > 0 {
            match word.cmp(self.previous_word.as_slice()) {
                Ordering::Less => {
                    return Err(DawgError::OutOfOrder {
                        previous: self.previous_word.to_vec(),
                        word: word.to_vec(),
                    })
                }
                Ordering::Equal => {
                    tracing::trace!(?word, "skipping duplicate word");
                    return Ok(false);
                }
                Ordering::Greater => {}
            }
        }

        let common = common_prefix_len(word, self.previous_word.as_slice());
        self.minimize_to(common);

        self.frontier.extend(word[common..].iter().map(|&label| Pending {
            label,
            state: State::new(false),
        }));
        self.edge_count += word.len() - common;
        self.state_at_mut(word.len()).set_accepting(true);

        self.previous_word.clear();
        self.previous_word.extend_from_slice(word);
        self.word_count += 1;
        Ok(true)
    }

    /// Finalizes every frontier state deeper than `depth`, deepest first.
    fn minimize_to(&mut self, depth: usize) {
        while self.frontier.len() > depth {
            let Pending { label, state } = self.pop_pending();
            let child = self.finalize(state);
            let parent_depth = self.frontier.len();
            self.state_at_mut(parent_depth)
                .add_transition(label, child)
                .expect("sorted input never repeats a label at one state");
        }
    }

    fn pop_pending(&mut self) -> Pending<C> {
        self.frontier
            .pop()
            .expect("minimize_to only pops while the frontier is deeper than the target")
    }

    /// Returns the frontier state reached after `depth` labels of the previous word.
    fn state_at_mut(&mut self, depth: usize) -> &mut State<C> {
        match depth.checked_sub(1) {
            None => &mut self.root,
            Some(i) => &mut self.frontier[i].state,
        }
    }

    /// Returns the id of a registered state equivalent to `state`, registering
    /// `state` itself if there is none.
    fn finalize(&mut self, state: State<C>) -> StateId {
        let signature = state.signature();
        if let Some(&existing) = self.registry.get(&signature) {
            // The shared state already owns equivalent outgoing edges.
            self.edge_count -= state.transition_count();
            existing
        } else {
            let id = self.arena.alloc(state);
            self.registry.insert(signature, id);
            id
        }
    }

    /// Returns the number of words added so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Finalizes the DAWG construction and returns the immutable automaton.
    ///
    /// This method consumes the builder, minimizes the path of the last word and
    /// drops the signature registry.
    ///
    /// # Panics
    ///
    /// Panics if the automaton needs a state beyond [`StateId::MAX_INDEX`].
    pub fn finish(mut self) -> Dawg<C> {
        self.minimize_to(0);
        let root = self.arena.alloc(self.root);
        tracing::debug!(
            words = self.word_count,
            states = self.arena.len(),
            edges = self.edge_count,
            "dawg built"
        );
        Dawg::from_parts(self.arena, root, self.word_count, self.edge_count)
    }
}

impl<C: DawgChar> Default for Builder<C> {
    fn default() -> Self {
        Builder::new()
    }
}

fn common_prefix_len<C: DawgChar>(a: &[C], b: &[C]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Builds a DAWG from an iterator of words.
///
/// Each word must implement [`IntoWord`], allowing this function to accept
/// `&str`, `String`, slices, vectors, arrays, or any other supported word type.
///
/// Words **must** be provided in lexicographically sorted order, or this function will
/// return an error; they are not sorted here. Repeated words are ignored.
///
/// # Examples
///
/// Building from byte sequences:
///
/// ```
/// use prefix_dawg::dawg::builder::build_dawg;
///
/// let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
/// let dawg = build_dawg(words).unwrap();
/// assert!(dawg.contains([1, 2, 3]));
/// assert!(!dawg.contains([1, 2, 5]));
/// ```
///
/// Building from strings:
///
/// ```
/// use prefix_dawg::dawg::builder::build_dawg;
///
/// let dawg = build_dawg(["APPLE", "BANANA", "CHERRY"]).unwrap();
/// assert!(dawg.contains("BANANA"));
/// assert!(!dawg.contains("APRICOT"));
/// ```
pub fn build_dawg<C, W>(words: impl IntoIterator<Item = W>) -> Result<Dawg<C>, DawgError<C>>
where
    C: DawgChar,
    W: IntoWord<C>,
{
    let mut builder = Builder::new();
    for word in words {
        builder.insert(word)?;
    }
    Ok(builder.finish())
}
