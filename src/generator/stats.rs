//! Summary statistics for a generation run
//!
//! Informational only; nothing here is written to the catalog.

use super::enumerator::Generation;

/// Min / median / max of a list of candidate counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSummary {
    pub min: usize,
    pub median: usize,
    pub max: usize,
}

impl CountSummary {
    /// Summarize `counts`; `None` when empty
    ///
    /// The median is the middle element of the sorted list, and the
    /// lower-middle one for even lengths. No averaging.
    #[must_use]
    pub fn from_counts(counts: &[usize]) -> Option<Self> {
        let mut sorted = counts.to_vec();
        sorted.sort_unstable();
        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let median = sorted[(sorted.len() - 1) / 2];
        Some(Self { min, median, max })
    }
}

/// Statistics reported after a run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    pub total_possible: usize,
    pub kept: usize,
    pub dropped_too_few: usize,
    pub dropped_no_bonus: usize,
    pub all: Option<CountSummary>,
    pub kept_summary: Option<CountSummary>,
    /// `kept / total_possible`, 0 when nothing was enumerated
    pub kept_ratio: f64,
}

impl GenerationStats {
    #[must_use]
    pub fn from_generation(generation: &Generation) -> Self {
        let kept = generation.patterns.len();
        let kept_ratio = if generation.total_possible > 0 {
            kept as f64 / generation.total_possible as f64
        } else {
            0.0
        };

        Self {
            total_possible: generation.total_possible,
            kept,
            dropped_too_few: generation.dropped_too_few,
            dropped_no_bonus: generation.dropped_no_bonus,
            all: CountSummary::from_counts(&generation.candidate_counts_all),
            kept_summary: CountSummary::from_counts(&generation.candidate_counts_kept),
            kept_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::core::Word;
    use crate::generator::PatternGenerator;

    #[test]
    fn summary_of_odd_length_list() {
        let summary = CountSummary::from_counts(&[9, 1, 5]).unwrap();
        assert_eq!(
            summary,
            CountSummary {
                min: 1,
                median: 5,
                max: 9
            }
        );
    }

    #[test]
    fn summary_of_even_length_list_uses_lower_middle() {
        let summary = CountSummary::from_counts(&[4, 1, 3, 2]).unwrap();
        assert_eq!(summary.median, 2);
    }

    #[test]
    fn summary_of_single_value() {
        let summary = CountSummary::from_counts(&[7]).unwrap();
        assert_eq!((summary.min, summary.median, summary.max), (7, 7, 7));
    }

    #[test]
    fn summary_of_empty_list() {
        assert!(CountSummary::from_counts(&[]).is_none());
    }

    #[test]
    fn stats_from_generation() {
        let vocab: Vec<Word> = ["CRANE", "CRATE", "CRUST", "TRUST"]
            .iter()
            .map(|&t| Word::new(t).unwrap())
            .collect();
        let config = GeneratorConfig {
            len_min: 5,
            len_max: 5,
            min_candidates: 3,
            min_bonus: 1,
        };
        let generation = PatternGenerator::new(&vocab, config).generate();
        let stats = GenerationStats::from_generation(&generation);

        assert_eq!(stats.total_possible, 1352);
        // Start-C words share only C and R, so those are the two kept patterns
        assert_eq!(stats.kept, 2);
        assert_eq!(
            stats.kept + stats.dropped_too_few + stats.dropped_no_bonus,
            stats.total_possible
        );

        let all = stats.all.unwrap();
        assert_eq!(all.min, 0);
        assert_eq!(all.median, 0);
        assert_eq!(all.max, 3);

        let kept = stats.kept_summary.unwrap();
        assert_eq!((kept.min, kept.median, kept.max), (3, 3, 3));
        assert!((stats.kept_ratio - stats.kept as f64 / 1352.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_with_nothing_kept() {
        let generation = PatternGenerator::new(&[], GeneratorConfig::default()).generate();
        let stats = GenerationStats::from_generation(&generation);

        assert_eq!(stats.kept, 0);
        assert!(stats.kept_summary.is_none());
        assert_eq!(stats.all.unwrap().max, 0);
        assert!(stats.kept_ratio.abs() < f64::EPSILON);
    }
}
