//! Letter alphabet and distinct-letter sets
//!
//! Letters are stored as uppercase ASCII bytes (`b'A'..=b'Z'`). A `LetterSet`
//! packs the distinct letters of a word into a 26-bit mask so that
//! containment checks and per-word tallies cost a single bit test.

use std::fmt;

/// The uppercase alphabet in natural order
pub const ALPHABET: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Zero-based alphabet index of an uppercase letter
///
/// Returns `None` for anything outside `A-Z`.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

/// Set of distinct uppercase letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build the set of distinct letters occurring in `bytes`
    ///
    /// Bytes outside `A-Z` are ignored.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        for &b in bytes {
            set.insert(b);
        }
        set
    }

    /// Add a letter; non-letters are ignored
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if let Some(idx) = letter_index(letter) {
            self.0 |= 1 << idx;
        }
    }

    /// Check whether the set holds `letter`
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match letter_index(letter) {
            Some(idx) => self.0 & (1 << idx) != 0,
            None => false,
        }
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        ALPHABET
            .into_iter()
            .enumerate()
            .filter(move |&(idx, _)| self.0 & (1 << idx) != 0)
            .map(|(_, letter)| letter)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
