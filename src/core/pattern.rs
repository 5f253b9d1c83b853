//! Bound pattern records
//!
//! A bound pattern fixes a letter at one end of a word of a given length,
//! requires a second letter anywhere in the word, and names a bonus letter
//! for extra credit. Patterns are the unit written to the catalog file.
//!
//! Serialized field order is part of the file format:
//! `len, side, bound, required, bonus, candidates, bonusCandidates`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which end of the word the bound letter is fixed at
///
/// Variant order defines the catalog ordering: `Start < End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Start,
    End,
}

impl Side {
    /// Both sides in enumeration order
    pub const ALL: [Self; 2] = [Self::Start, Self::End];

    /// Lowercase name as written in the catalog
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One emitted catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundPattern {
    pub len: usize,
    pub side: Side,
    pub bound: char,
    pub required: char,
    pub bonus: char,
    pub candidates: usize,
    pub bonus_candidates: usize,
}

impl BoundPattern {
    /// Catalog sort key
    #[must_use]
    pub const fn sort_key(&self) -> (usize, Side, char, char, char) {
        (self.len, self.side, self.bound, self.required, self.bonus)
    }
}

impl fmt::Display for BoundPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-letter, {} {}, needs {}, bonus {} ({} candidates, {} with bonus)",
            self.len,
            self.side,
            self.bound,
            self.required,
            self.bonus,
            self.candidates,
            self.bonus_candidates
        )
    }
}
