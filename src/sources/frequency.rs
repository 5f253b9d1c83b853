//! Frequency wordlist builder
//!
//! Extracts a word column and a log-frequency column into a `word -> score`
//! map. This map is the vocabulary source of the pattern generator.

use super::table::{Table, TableError};
use super::{SOURCE_LEN_MAX, SOURCE_LEN_MIN, clean_word, parse_finite};
use std::collections::BTreeMap;
use tracing::debug;

/// Column names and length window for the frequency builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyOptions {
    pub word_column: String,
    pub score_column: String,
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            word_column: "Word".to_string(),
            score_column: "Lg10WF".to_string(),
            min_len: SOURCE_LEN_MIN,
            max_len: SOURCE_LEN_MAX,
        }
    }
}

/// Built `word -> score` map and how many rows were dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyWordlist {
    pub entries: BTreeMap<String, f64>,
    pub skipped: usize,
}

/// Build the frequency wordlist from a table
///
/// Rows with an empty cell, a non-alphabetic word, a word outside the length
/// window or an unparseable score are skipped. A later row for the same word
/// replaces the earlier score.
///
/// # Errors
///
/// Returns `TableError::MissingColumns` if either column is absent.
pub fn build_frequency_wordlist(
    table: &Table,
    options: &FrequencyOptions,
) -> Result<FrequencyWordlist, TableError> {
    let columns = table.require_columns(&[
        options.word_column.as_str(),
        options.score_column.as_str(),
    ])?;
    let (word_col, score_col) = (columns[0], columns[1]);

    let mut wordlist = FrequencyWordlist::default();
    for row in table.rows() {
        let entry = clean_word(&row[word_col])
            .filter(|word| (options.min_len..=options.max_len).contains(&word.len()))
            .zip(parse_finite(&row[score_col]));

        match entry {
            Some((word, score)) => {
                wordlist.entries.insert(word, score);
            }
            None => wordlist.skipped += 1,
        }
    }

    debug!(
        "Frequency wordlist: {} entries, {} rows skipped",
        wordlist.entries.len(),
        wordlist.skipped
    );
    Ok(wordlist)
}
