//! Core domain types for bound patterns
//!
//! Letters, words and the emitted pattern record. Everything here is pure and
//! independent of file I/O.

mod letter;
mod pattern;
mod word;

pub use letter::{ALPHABET, ALPHABET_LEN, LetterSet, letter_index};
pub use pattern::{BoundPattern, Side};
pub use word::{Word, WordError, sanitize};
