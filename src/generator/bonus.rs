//! Bonus letter selection
//!
//! Ranks letters by how many candidate words contain them and picks the
//! best-covered letter other than the required one.

use crate::core::{ALPHABET, ALPHABET_LEN, Word, letter_index};
use std::cmp::Reverse;

/// Chosen bonus letter and its coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusChoice {
    pub letter: u8,
    pub coverage: usize,
}

/// Count, per letter, the distinct candidate words containing it
///
/// A word contributes at most one to each letter, however many times the
/// letter repeats in it.
#[must_use]
pub fn letter_coverage(candidates: &[&Word]) -> [usize; ALPHABET_LEN] {
    let mut coverage = [0usize; ALPHABET_LEN];
    for word in candidates {
        for letter in word.letters().iter() {
            if let Some(idx) = letter_index(letter) {
                coverage[idx] += 1;
            }
        }
    }
    coverage
}

/// Letters other than `required`, ordered by coverage descending
///
/// The sort is stable over the alphabet, so equal coverage keeps A-Z order.
#[must_use]
pub fn rank_letters(coverage: &[usize; ALPHABET_LEN], required: u8) -> Vec<(u8, usize)> {
    let mut ranked: Vec<(u8, usize)> = ALPHABET
        .iter()
        .zip(coverage)
        .filter(|&(&letter, _)| letter != required)
        .map(|(&letter, &count)| (letter, count))
        .collect();
    ranked.sort_by_key(|&(_, count)| Reverse(count));
    ranked
}

/// Pick the bonus letter for a qualifying candidate set
///
/// Walks the ranked letters and returns the first whose coverage reaches
/// `min_bonus`. Returns `None` when no letter does, in which case the
/// combination must be dropped.
///
/// # Examples
/// ```
/// use bound_patterns::core::Word;
/// use bound_patterns::generator::bonus::select_bonus;
///
/// let words = [Word::new("CRANE").unwrap(), Word::new("CRATE").unwrap()];
/// let refs: Vec<&Word> = words.iter().collect();
/// let choice = select_bonus(&refs, b'R', 1).unwrap();
/// assert_eq!(choice.letter, b'A');
/// assert_eq!(choice.coverage, 2);
/// ```
#[must_use]
pub fn select_bonus(candidates: &[&Word], required: u8, min_bonus: usize) -> Option<BonusChoice> {
    let coverage = letter_coverage(candidates);
    rank_letters(&coverage, required)
        .into_iter()
        .find(|&(_, count)| count >= min_bonus)
        .map(|(letter, coverage)| BonusChoice { letter, coverage })
}
