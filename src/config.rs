//! Generation tunables
//!
//! All thresholds are carried in a [`GeneratorConfig`] passed into the
//! pipeline, so tests can run the generator with small word windows and
//! thresholds.

use std::ops::RangeInclusive;
use thiserror::Error;

/// Default minimum word length
pub const DEFAULT_LEN_MIN: usize = 5;
/// Default maximum word length
pub const DEFAULT_LEN_MAX: usize = 10;
/// Default minimum number of required-letter candidates
pub const DEFAULT_MIN_CANDIDATES: usize = 60;
/// Default minimum number of candidates containing the bonus letter
pub const DEFAULT_MIN_BONUS: usize = 1;

/// Default frequency wordlist consumed by `generate`
pub const DEFAULT_WORDLIST_PATH: &str = "public/subtlex-us-zipf.json";
/// Default catalog written by `generate`
pub const DEFAULT_CATALOG_PATH: &str = "public/bound-patterns.json";
/// Default output of the `difficulty` builder
pub const DEFAULT_DIFFICULTY_PATH: &str = "public/bound-difficulty.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Minimum word length must be at least 1")]
    ZeroLength,

    #[error("Minimum word length {min} exceeds maximum {max}")]
    InvertedWindow { min: usize, max: usize },

    #[error("Minimum bonus coverage must be at least 1")]
    ZeroBonus,
}

/// Thresholds and length window for pattern generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub len_min: usize,
    pub len_max: usize,
    pub min_candidates: usize,
    pub min_bonus: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            len_min: DEFAULT_LEN_MIN,
            len_max: DEFAULT_LEN_MAX,
            min_candidates: DEFAULT_MIN_CANDIDATES,
            min_bonus: DEFAULT_MIN_BONUS,
        }
    }
}

impl GeneratorConfig {
    /// Check the window and thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the length window is empty or starts at 0,
    /// or when `min_bonus` is 0 (which would admit a bonus letter absent from
    /// every candidate).
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.len_min == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.len_min > self.len_max {
            return Err(ConfigError::InvertedWindow {
                min: self.len_min,
                max: self.len_max,
            });
        }
        if self.min_bonus == 0 {
            return Err(ConfigError::ZeroBonus);
        }
        Ok(())
    }

    /// Inclusive word-length window
    #[must_use]
    pub const fn lengths(&self) -> RangeInclusive<usize> {
        self.len_min..=self.len_max
    }

    /// Whether a word length falls inside the window
    #[must_use]
    pub const fn accepts_len(&self, len: usize) -> bool {
        self.len_min <= len && len <= self.len_max
    }
}
