use smallvec::SmallVec;

use super::char_trait::DawgChar;
use super::error::DawgError;

/// Transitions stay inline until a state has more than two of them.
pub(crate) type TransitionVec<C> = SmallVec<[(C, StateId); 2]>;

/// States with more transitions than this are searched by bisection.
const LINEAR_SCAN_MAX: usize = 16;

/// Identity of a finalized state: its index in the automaton's arena.
///
/// Ids are handed out in allocation order by the arena of a single builder,
/// so they are unique within one automaton and meaningless across two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    /// Largest arena index a state can have.
    pub const MAX_INDEX: usize = u32::MAX as usize;

    /// Wraps an arena index.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in a `u32`.
    pub(crate) fn from_index(index: usize) -> Self {
        StateId(u32::try_from(index).expect("state count exceeds u32::MAX"))
    }

    /// Returns the arena index of this state.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Canonical form of a state: its accept flag and its ordered transitions.
///
/// Two states with equal signatures accept exactly the same suffixes, provided
/// the transition targets are themselves canonical. That holds by
/// construction: only finalized states have a [`StateId`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature<C: DawgChar> {
    accepting: bool,
    transitions: TransitionVec<C>,
}

/// A state of the automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State<C: DawgChar> {
    transitions: TransitionVec<C>,
    accepting: bool,
}

impl<C: DawgChar> State<C> {
    /// Creates a state without transitions.
    ///
    /// # Arguments
    ///
    /// * `accepting` - Whether a word ends at this state
    pub fn new(accepting: bool) -> Self {
        State {
            transitions: SmallVec::new(),
            accepting,
        }
    }

    /// True if a word ends at this state.
    #[inline]
    pub fn accepting(&self) -> bool {
        self.accepting
    }

    /// Marks or unmarks this state as the end of a word.
    pub fn set_accepting(&mut self, accepting: bool) {
        self.accepting = accepting;
    }

    /// Returns the target of the transition labeled `label`, if any.
    #[inline]
    pub fn transition(&self, label: C) -> Option<StateId> {
        if self.transitions.len() > LINEAR_SCAN_MAX {
            return self
                .transitions
                .binary_search_by_key(&label, |&(ch, _)| ch)
                .ok()
                .map(|i| self.transitions[i].1);
        }
        // Unrolled by 2 so the two loads of each chunk issue together.
        let chunks = self.transitions.chunks_exact(2);
        let remainder = chunks.remainder();
        for chunk in chunks {
            if chunk[0].0 == label {
                return Some(chunk[0].1);
            }
            if chunk[1].0 == label {
                return Some(chunk[1].1);
            }
        }
        remainder
            .iter()
            .find(|&&(ch, _)| ch == label)
            .map(|&(_, target)| target)
    }

    /// Returns the most recently added transition.
    #[inline]
    pub fn last_transition(&self) -> Option<(C, StateId)> {
        self.transitions.last().copied()
    }

    /// Returns all transitions in insertion order, which is ascending label order.
    #[inline]
    pub fn transitions(&self) -> &[(C, StateId)] {
        &self.transitions
    }

    /// Returns the number of outgoing transitions.
    #[inline]
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Appends a transition to `target` labeled `label`.
    ///
    /// Labels must be added in ascending order, so only the last transition
    /// needs checking.
    ///
    /// # Errors
    ///
    /// Returns [`DawgError::DuplicateLabel`] if `label` does not sort after the
    /// label of the last transition.
    pub fn add_transition(&mut self, label: C, target: StateId) -> Result<(), DawgError<C>> {
        if let Some((last, _)) = self.last_transition() {
            if last >= label {
                return Err(DawgError::DuplicateLabel(label));
            }
        }
        self.transitions.push((label, target));
        Ok(())
    }

    /// Computes the structural signature used to detect equivalent states.
    pub fn signature(&self) -> Signature<C> {
        Signature {
            accepting: self.accepting,
            transitions: self.transitions.clone(),
        }
    }
}

impl<C: DawgChar> Default for State<C> {
    fn default() -> Self {
        State::new(false)
    }
}
