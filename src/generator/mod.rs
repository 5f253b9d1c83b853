//! Bound-pattern generation
//!
//! Index the vocabulary, enumerate every (length, side, bound, required)
//! combination, pick bonus letters, then sort the survivors into a catalog.

pub mod bonus;
pub mod catalog;
mod enumerator;
mod index;
pub mod stats;

pub use bonus::{BonusChoice, select_bonus};
pub use catalog::Catalog;
pub use enumerator::{Combination, Generation, Outcome, PatternGenerator};
pub use index::LengthSideIndex;
pub use stats::{CountSummary, GenerationStats};
