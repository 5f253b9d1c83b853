//! Frequency wordlist command
//!
//! Converts a word-frequency table export into the JSON wordlist consumed by
//! `generate`.

use crate::config::DEFAULT_WORDLIST_PATH;
use crate::persistence::{JsonStyle, write_json_atomic};
use crate::sources::{FrequencyOptions, Table, build_frequency_wordlist};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Configuration for building the frequency wordlist
#[derive(Debug, Clone)]
pub struct WordlistConfig {
    pub table: PathBuf,
    pub output: PathBuf,
    pub delimiter: Option<char>,
    pub options: FrequencyOptions,
}

impl WordlistConfig {
    #[must_use]
    pub fn new(table: PathBuf) -> Self {
        Self {
            table,
            output: PathBuf::from(DEFAULT_WORDLIST_PATH),
            delimiter: None,
            options: FrequencyOptions::default(),
        }
    }
}

/// Result of building the frequency wordlist
pub struct WordlistResult {
    pub entries: usize,
    pub skipped: usize,
    pub output: PathBuf,
}

/// Read the table, build the wordlist and write it compactly
///
/// # Errors
///
/// Returns an error if the table is missing or lacks a required column, or
/// if the output cannot be written.
pub fn run_wordlist(config: WordlistConfig) -> Result<WordlistResult> {
    let table = Table::read(&config.table, config.delimiter)
        .with_context(|| format!("Failed to read {}", config.table.display()))?;
    let wordlist = build_frequency_wordlist(&table, &config.options)?;

    write_json_atomic(&config.output, &wordlist.entries, JsonStyle::Compact)?;
    info!(
        "Wrote {} entries to {}",
        wordlist.entries.len(),
        config.output.display()
    );

    Ok(WordlistResult {
        entries: wordlist.entries.len(),
        skipped: wordlist.skipped,
        output: config.output,
    })
}
