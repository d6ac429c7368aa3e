use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can label the transitions of a DAWG.
///
/// Blanket-implemented for every type meeting the bounds, so `char`, `u8`,
/// `u16`, `u32` and friends all work out of the box.
///
/// - `Copy`: transitions store labels by value
/// - `Ord`: input words are validated and enumerated in label order
/// - `Hash`: labels take part in state signatures
/// - `Debug`: error messages and debug printing
pub trait DawgChar: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> DawgChar for T {}
