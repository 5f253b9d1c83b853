//! Pattern enumeration and candidate filtering
//!
//! Walks the full combinatorial space of (length, side, bound, required) in
//! a fixed order. Every combination is counted; only those with enough
//! candidates and a qualifying bonus letter become patterns.

use super::bonus::select_bonus;
use super::index::LengthSideIndex;
use crate::config::GeneratorConfig;
use crate::core::{ALPHABET, BoundPattern, Side, Word};
use tracing::debug;

/// What happened to a single combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Qualified and produced a pattern
    Kept(BoundPattern),
    /// Fewer candidates than `min_candidates`
    TooFewCandidates,
    /// Enough candidates, but no letter reached `min_bonus`
    NoBonus,
}

/// Result of evaluating one combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub candidates: usize,
    pub outcome: Outcome,
}

/// Accumulated output of an enumeration run
#[derive(Debug, Clone, Default)]
pub struct Generation {
    /// Kept patterns in enumeration order
    pub patterns: Vec<BoundPattern>,
    /// Every combination visited, kept or not
    pub total_possible: usize,
    /// Candidate count of every visited combination (0 for empty buckets)
    pub candidate_counts_all: Vec<usize>,
    /// Candidate count of every kept pattern
    pub candidate_counts_kept: Vec<usize>,
    pub dropped_too_few: usize,
    pub dropped_no_bonus: usize,
}

impl Generation {
    fn record(&mut self, combination: Combination) {
        self.total_possible += 1;
        self.candidate_counts_all.push(combination.candidates);
        match combination.outcome {
            Outcome::Kept(pattern) => {
                self.candidate_counts_kept.push(pattern.candidates);
                self.patterns.push(pattern);
            }
            Outcome::TooFewCandidates => self.dropped_too_few += 1,
            Outcome::NoBonus => self.dropped_no_bonus += 1,
        }
    }
}

/// Bound-pattern generator over a fixed vocabulary
pub struct PatternGenerator<'a> {
    config: GeneratorConfig,
    index: LengthSideIndex<'a>,
}

impl<'a> PatternGenerator<'a> {
    /// Index `words` and prepare to enumerate with `config`
    ///
    /// Words are expected to be pre-filtered to the configured window (the
    /// wordlist loader does this); words outside it are indexed but never visited.
    #[must_use]
    pub fn new(words: &'a [Word], config: GeneratorConfig) -> Self {
        Self {
            config,
            index: LengthSideIndex::build(words),
        }
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Enumerate every length in the window
    #[must_use]
    pub fn generate(&self) -> Generation {
        let mut generation = Generation::default();
        for len in self.config.lengths() {
            self.enumerate_length(len, &mut generation);
        }
        generation
    }

    /// Enumerate all sides, bounds and required letters for one length
    pub fn enumerate_length(&self, len: usize, generation: &mut Generation) {
        let kept_before = generation.patterns.len();
        for side in Side::ALL {
            for bound in ALPHABET {
                for required in ALPHABET {
                    generation.record(self.evaluate(len, side, bound, required));
                }
            }
        }
        debug!(
            "Length {len}: kept {} patterns",
            generation.patterns.len() - kept_before
        );
    }

    /// Words of length `len` with `bound` at `side` that contain `required`
    ///
    /// `required` may equal `bound`; the boundary occurrence itself satisfies it.
    #[must_use]
    pub fn candidates(&self, len: usize, side: Side, bound: u8, required: u8) -> Vec<&'a Word> {
        self.index
            .bucket(len, side, bound)
            .iter()
            .copied()
            .filter(|word| word.has_letter(required))
            .collect()
    }

    /// Evaluate a single combination
    #[must_use]
    pub fn evaluate(&self, len: usize, side: Side, bound: u8, required: u8) -> Combination {
        let candidates = self.candidates(len, side, bound, required);
        let count = candidates.len();

        if count < self.config.min_candidates {
            return Combination {
                candidates: count,
                outcome: Outcome::TooFewCandidates,
            };
        }

        let Some(bonus) = select_bonus(&candidates, required, self.config.min_bonus) else {
            return Combination {
                candidates: count,
                outcome: Outcome::NoBonus,
            };
        };

        Combination {
            candidates: count,
            outcome: Outcome::Kept(BoundPattern {
                len,
                side,
                bound: char::from(bound),
                required: char::from(required),
                bonus: char::from(bonus.letter),
                candidates: count,
                bonus_candidates: bonus.coverage,
            }),
        }
    }
}
