//! Upstream word data builders
//!
//! Turn spreadsheets (workbooks or their CSV/TSV exports) into the JSON word
//! maps used by the game: the frequency wordlist (the generator's input) and
//! the difficulty tiers.

pub mod difficulty;
pub mod frequency;
pub mod table;

pub use difficulty::{DifficultyMap, DifficultyOptions, build_difficulty_map, tier_from_aoa};
pub use frequency::{FrequencyOptions, FrequencyWordlist, build_frequency_wordlist};
pub use table::{Table, TableError, delimiter_for, is_workbook};

/// Shortest word kept by the builders
pub const SOURCE_LEN_MIN: usize = 4;
/// Longest word kept by the builders
pub const SOURCE_LEN_MAX: usize = 10;

/// Trim a cell and accept it only if it is entirely ASCII letters
///
/// Returns the uppercased word; hyphens, apostrophes and spaces reject the cell.
#[must_use]
pub fn clean_word(raw: &str) -> Option<String> {
    let word = raw.trim();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_uppercase())
}

/// Parse a finite floating-point cell
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
