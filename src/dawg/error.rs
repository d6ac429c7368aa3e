use thiserror::Error;

use super::char_trait::DawgChar;

/// Errors raised while building a DAWG.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DawgError<C: DawgChar> {
    /// Words were not provided in lexicographically sorted order.
    ///
    /// Carries the previously inserted word and the word that sorted before it.
    #[error("words out of order: {previous:?} came before {word:?}")]
    OutOfOrder {
        /// The last word that was accepted.
        previous: Vec<C>,
        /// The rejected word.
        word: Vec<C>,
    },

    /// A state already has a transition with this label.
    #[error("state already has a transition labeled {0:?}")]
    DuplicateLabel(C),
}

/// Errors raised while loading a word list into a DAWG.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the word list failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The word list could not be built into a DAWG.
    #[error("build error: {0}")]
    Build(#[from] DawgError<char>),
}
