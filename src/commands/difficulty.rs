//! Difficulty tier command
//!
//! Converts an age-of-acquisition table export into a `word -> tier` JSON map.
//! The generator does not read this file.

use crate::config::DEFAULT_DIFFICULTY_PATH;
use crate::persistence::{JsonStyle, write_json_atomic};
use crate::sources::difficulty::TIER_COUNT;
use crate::sources::{DifficultyOptions, Table, build_difficulty_map};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Configuration for building the difficulty map
#[derive(Debug, Clone)]
pub struct DifficultyConfig {
    pub table: PathBuf,
    pub output: PathBuf,
    pub delimiter: Option<char>,
    pub options: DifficultyOptions,
}

impl DifficultyConfig {
    #[must_use]
    pub fn new(table: PathBuf) -> Self {
        Self {
            table,
            output: PathBuf::from(DEFAULT_DIFFICULTY_PATH),
            delimiter: None,
            options: DifficultyOptions::default(),
        }
    }
}

/// Result of building the difficulty map
pub struct DifficultyResult {
    pub entries: usize,
    pub skipped: usize,
    pub tier_counts: [usize; TIER_COUNT],
    pub output: PathBuf,
}

/// Read the table, bucket words into tiers and write the map compactly
///
/// # Errors
///
/// Returns an error if the table is missing or lacks a required column, or
/// if the output cannot be written.
pub fn run_difficulty(config: DifficultyConfig) -> Result<DifficultyResult> {
    let table = Table::read(&config.table, config.delimiter)
        .with_context(|| format!("Failed to read {}", config.table.display()))?;
    let map = build_difficulty_map(&table, &config.options)?;

    write_json_atomic(&config.output, &map.entries, JsonStyle::Compact)?;
    info!(
        "Wrote {} entries to {}",
        map.entries.len(),
        config.output.display()
    );

    Ok(DifficultyResult {
        entries: map.entries.len(),
        skipped: map.skipped,
        tier_counts: map.tier_counts(),
        output: config.output,
    })
}
