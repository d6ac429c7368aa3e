/// Index-addressed storage for finalized states.
pub(crate) mod arena;
/// Incremental DAWG construction from sorted words.
pub mod builder;
/// Trait for types that can serve as DAWG transition labels.
pub mod char_trait;
/// Error types for building and loading.
pub mod error;
/// The immutable DAWG and its query operations.
pub mod index;
/// Automaton states and their structural signatures.
pub mod state;
/// Loading word lists from files and readers.
pub mod wordlist;

pub use builder::{build_dawg, Builder, IntoWord};
pub use char_trait::DawgChar;
pub use error::{DawgError, LoadError};
pub use index::{Dawg, Node, Words};
pub use state::{Signature, State, StateId};
pub use wordlist::LoadOptions;
