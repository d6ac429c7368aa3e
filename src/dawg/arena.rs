//! Index-addressed storage for finalized DAWG states.
//!
//! States never move once allocated and are referred to by [`StateId`], so
//! sharing a sub-automaton between several parents is just copying an id.

use std::ops::Index;

use super::char_trait::DawgChar;
use super::state::{State, StateId};

/// Arena owning every finalized state of one automaton.
///
/// The arena is also the id source: a state's id is the number of states
/// allocated before it, so ids increase monotonically per arena.
#[derive(Debug, Clone)]
pub(crate) struct StateArena<C: DawgChar> {
    states: Vec<State<C>>,
}

impl<C: DawgChar> StateArena<C> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        StateArena { states: Vec::new() }
    }

    /// Moves a state into the arena and returns its id.
    pub fn alloc(&mut self, state: State<C>) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(state);
        id
    }

    /// Returns the number of states allocated in this arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Iterates over all states in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = &State<C>> {
        self.states.iter()
    }
}

impl<C: DawgChar> Index<StateId> for StateArena<C> {
    type Output = State<C>;

    #[inline]
    fn index(&self, id: StateId) -> &State<C> {
        &self.states[id.index()]
    }
}
