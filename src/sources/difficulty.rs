//! Difficulty tier builder
//!
//! Buckets age-of-acquisition into four tiers:
//!
//! | AoA (years) | Tier |
//! |-------------|------|
//! | ≤ 8.5       | 1 (elementary) |
//! | ≤ 11.5      | 2 (middle school) |
//! | ≤ 14.5      | 3 (high school) |
//! | above       | 4 (university) |

use super::table::{Table, TableError};
use super::{SOURCE_LEN_MAX, SOURCE_LEN_MIN, clean_word, parse_finite};
use std::collections::BTreeMap;
use tracing::debug;

/// Number of difficulty tiers
pub const TIER_COUNT: usize = 4;

/// Map an age of acquisition to its tier (1-4)
#[must_use]
pub fn tier_from_aoa(aoa: f64) -> u8 {
    if aoa <= 8.5 {
        1
    } else if aoa <= 11.5 {
        2
    } else if aoa <= 14.5 {
        3
    } else {
        4
    }
}

/// Column names and length window for the difficulty builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyOptions {
    pub word_column: String,
    pub aoa_column: String,
    pub length_column: String,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for DifficultyOptions {
    fn default() -> Self {
        Self {
            word_column: "Word".to_string(),
            aoa_column: "AoA_Kup_lem".to_string(),
            length_column: "Nletters".to_string(),
            min_len: SOURCE_LEN_MIN,
            max_len: SOURCE_LEN_MAX,
        }
    }
}

/// Built `word -> tier` map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DifficultyMap {
    pub entries: BTreeMap<String, u8>,
    pub skipped: usize,
}

impl DifficultyMap {
    /// Number of words per tier, index 0 is tier 1
    #[must_use]
    pub fn tier_counts(&self) -> [usize; TIER_COUNT] {
        let mut counts = [0; TIER_COUNT];
        for &tier in self.entries.values() {
            counts[usize::from(tier - 1)] += 1;
        }
        counts
    }
}

/// Parse the letter-count cell; integral decimals such as `7.0` are accepted
///
/// Fractional counts like `7.5` are rejected, not truncated, so the row is skipped.
fn parse_letter_count(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<usize>() {
        return Some(n);
    }
    parse_finite(raw)
        .filter(|v| *v >= 0.0 && v.fract() == 0.0)
        .map(|v| v as usize)
}

/// Build the difficulty map from a table
///
/// The length window is checked against the letter-count column, not the
/// word itself. When a word appears more than once the higher tier wins.
///
/// # Errors
///
/// Returns `TableError::MissingColumns` if any of the three columns is absent.
pub fn build_difficulty_map(
    table: &Table,
    options: &DifficultyOptions,
) -> Result<DifficultyMap, TableError> {
    let columns = table.require_columns(&[
        options.word_column.as_str(),
        options.aoa_column.as_str(),
        options.length_column.as_str(),
    ])?;
    let (word_col, aoa_col, len_col) = (columns[0], columns[1], columns[2]);

    let mut map = DifficultyMap::default();
    for row in table.rows() {
        let Some(word) = clean_word(&row[word_col]) else {
            map.skipped += 1;
            continue;
        };

        let in_window = parse_letter_count(&row[len_col])
            .is_some_and(|n| (options.min_len..=options.max_len).contains(&n));
        if !in_window {
            map.skipped += 1;
            continue;
        }

        let Some(aoa) = parse_finite(&row[aoa_col]) else {
            map.skipped += 1;
            continue;
        };

        let tier = tier_from_aoa(aoa);
        map.entries
            .entry(word)
            .and_modify(|existing| *existing = (*existing).max(tier))
            .or_insert(tier);
    }

    debug!(
        "Difficulty map: {} entries, {} rows skipped",
        map.entries.len(),
        map.skipped
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(tier_from_aoa(3.0), 1);
        assert_eq!(tier_from_aoa(8.5), 1);
        assert_eq!(tier_from_aoa(8.51), 2);
        assert_eq!(tier_from_aoa(11.5), 2);
        assert_eq!(tier_from_aoa(11.51), 3);
        assert_eq!(tier_from_aoa(14.5), 3);
        assert_eq!(tier_from_aoa(14.51), 4);
        assert_eq!(tier_from_aoa(25.0), 4);
    }

    #[test]
    fn builds_tiers_from_table() {
        let text = "\
Word\tAoA_Kup_lem\tNletters
apple\t3.2\t5
justice\t9.9\t7
hypothesis\t13.1\t10
ubiquitous\t16.4\t10
cat\t2.5\t3
x-ray\t7.0\t5
sofa\tNA\t4
tree\t4.1\tfour
";
        let table = Table::parse(text, '\t').unwrap();
        let map = build_difficulty_map(&table, &DifficultyOptions::default()).unwrap();

        assert_eq!(map.entries.len(), 4);
        assert_eq!(map.entries["APPLE"], 1);
        assert_eq!(map.entries["JUSTICE"], 2);
        assert_eq!(map.entries["HYPOTHESIS"], 3);
        assert_eq!(map.entries["UBIQUITOUS"], 4);
        assert_eq!(map.skipped, 4);
        assert_eq!(map.tier_counts(), [1, 1, 1, 1]);
    }

    #[test]
    fn duplicate_keeps_harder_tier() {
        let text = "Word,AoA_Kup_lem,Nletters\nbank,5.0,4\nBank,12.0,4\nbank,7.0,4\n";
        let table = Table::parse(text, ',').unwrap();
        let map = build_difficulty_map(&table, &DifficultyOptions::default()).unwrap();

        assert_eq!(map.entries.len(), 1);
        assert_eq!(map.entries["BANK"], 3);
    }

    #[test]
    fn letter_count_accepts_integral_decimals() {
        assert_eq!(parse_letter_count("7"), Some(7));
        assert_eq!(parse_letter_count(" 7.0 "), Some(7));
        assert_eq!(parse_letter_count("7.5"), None);
        assert_eq!(parse_letter_count("-1"), None);
        assert_eq!(parse_letter_count(""), None);
    }

    #[test]
    fn window_uses_letter_count_column() {
        // The word has 4 letters but the sheet says 11
        let text = "Word,AoA_Kup_lem,Nletters\nbank,5.0,11\n";
        let table = Table::parse(text, ',').unwrap();
        let map = build_difficulty_map(&table, &DifficultyOptions::default()).unwrap();
        assert!(map.entries.is_empty());
        assert_eq!(map.skipped, 1);
    }

    #[test]
    fn missing_columns_are_fatal() {
        let table = Table::parse("Word,AoA\nbank,5.0\n", ',').unwrap();
        match build_difficulty_map(&table, &DifficultyOptions::default()) {
            Err(TableError::MissingColumns { missing, .. }) => {
                assert_eq!(missing, ["AoA_Kup_lem", "Nletters"]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }
}
