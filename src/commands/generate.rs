//! Catalog generation command
//!
//! Load wordlist, index, enumerate, sort, write. Nothing is written unless
//! every earlier step succeeds.

use crate::config::{DEFAULT_CATALOG_PATH, DEFAULT_WORDLIST_PATH, GeneratorConfig};
use crate::generator::{Catalog, Generation, GenerationStats, PatternGenerator};
use crate::wordlists::load_from_file;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;

/// Paths and thresholds for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub generator: GeneratorConfig,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_WORDLIST_PATH),
            output: PathBuf::from(DEFAULT_CATALOG_PATH),
            generator: GeneratorConfig::default(),
        }
    }
}

/// Result of a generation run
pub struct GenerateResult {
    pub catalog: Catalog,
    pub stats: GenerationStats,
    pub vocabulary: usize,
    pub config: GenerateConfig,
}

/// Run the full pipeline and write the catalog
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - The wordlist is missing or malformed
/// - The catalog cannot be written
pub fn run_generate(config: GenerateConfig) -> Result<GenerateResult> {
    config
        .generator
        .validate()
        .context("Invalid generator configuration")?;

    let words = load_from_file(&config.input, &config.generator)
        .with_context(|| format!("Failed to load wordlist {}", config.input.display()))?;

    let generator = PatternGenerator::new(&words, config.generator);
    let generation = enumerate_with_progress(&generator);
    info!(
        "Enumerated {} combinations, kept {}",
        generation.total_possible,
        generation.patterns.len()
    );

    let stats = GenerationStats::from_generation(&generation);
    let catalog = Catalog::assemble(generation.patterns);
    catalog
        .write(&config.output)
        .with_context(|| format!("Failed to write catalog {}", config.output.display()))?;

    Ok(GenerateResult {
        catalog,
        stats,
        vocabulary: words.len(),
        config,
    })
}

/// Enumerate length by length, ticking a progress bar on interactive terminals
fn enumerate_with_progress(generator: &PatternGenerator<'_>) -> Generation {
    let lengths = generator.config().lengths();
    let pb = ProgressBar::new(lengths.clone().count() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} lengths | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut generation = Generation::default();
    for len in lengths {
        pb.set_message(format!("{len}-letter words"));
        generator.enumerate_length(len, &mut generation);
        pb.inc(1);
    }
    pb.finish_and_clear();
    generation
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_wordlist(dir: &std::path::Path, words: &[&str]) -> PathBuf {
        let map: serde_json::Map<String, serde_json::Value> = words
            .iter()
            .map(|w| ((*w).to_string(), serde_json::json!(3.5)))
            .collect();
        let path = dir.join("wordlist.json");
        fs::write(&path, serde_json::to_string(&map).unwrap()).unwrap();
        path
    }

    fn small_config(input: PathBuf, output: PathBuf) -> GenerateConfig {
        GenerateConfig {
            input,
            output,
            generator: GeneratorConfig {
                len_min: 5,
                len_max: 5,
                min_candidates: 2,
                min_bonus: 1,
            },
        }
    }

    #[test]
    fn generate_writes_sorted_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_wordlist(dir.path(), &["crane", "crate", "trust", "cat"]);
        let output = dir.path().join("public/bound-patterns.json");

        let result = run_generate(small_config(input, output.clone())).unwrap();

        assert_eq!(result.vocabulary, 3);
        assert_eq!(result.stats.total_possible, 1352);
        assert!(!result.catalog.is_empty());

        let written = Catalog::from_json(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, result.catalog);
        assert!(
            written
                .patterns()
                .iter()
                .any(|p| p.bound == 'C' && p.required == 'R' && p.bonus == 'A')
        );
    }

    #[test]
    fn generate_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_wordlist(
            dir.path(),
            &["crane", "crate", "crust", "trust", "treat", "slate", "stare"],
        );
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");

        run_generate(small_config(input.clone(), first.clone())).unwrap();
        run_generate(small_config(input, second.clone())).unwrap();

        assert_eq!(fs::read(first).unwrap(), fs::read(second).unwrap());
    }

    #[test]
    fn missing_wordlist_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("bound-patterns.json");

        let result = run_generate(small_config(dir.path().join("missing.json"), output.clone()));

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_wordlist(dir.path(), &["crane"]);
        let output = dir.path().join("bound-patterns.json");
        let mut config = small_config(input, output.clone());
        config.generator.len_min = 9;

        assert!(run_generate(config).is_err());
        assert!(!output.exists());
    }
}
