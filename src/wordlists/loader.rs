//! Word list loading utilities
//!
//! Reads a frequency wordlist (a JSON object mapping words to scores) and
//! turns its keys into the vocabulary used by the generator. Scores are ignored.

use crate::config::GeneratorConfig;
use crate::core::{Word, sanitize};
use rustc_hash::FxHashSet;
use serde::de::IgnoredAny;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Wordlist not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to read wordlist: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse wordlist (expected a JSON object of word -> score): {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the vocabulary from a frequency wordlist file
///
/// # Errors
///
/// Returns `LoadError::Missing` if the file does not exist, `LoadError::Read`
/// if it cannot be read and `LoadError::Parse` if it is not a JSON object.
///
/// # Examples
/// ```no_run
/// use bound_patterns::config::GeneratorConfig;
/// use bound_patterns::wordlists::loader::load_from_file;
///
/// let words = load_from_file("public/subtlex-us-zipf.json", &GeneratorConfig::default()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    config: &GeneratorConfig,
) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::Missing(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let words = words_from_json(&content, config)?;
    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a frequency wordlist held in memory
///
/// # Errors
///
/// Returns `LoadError::Parse` if `json` is not an object.
pub fn words_from_json(json: &str, config: &GeneratorConfig) -> Result<Vec<Word>, LoadError> {
    let entries: BTreeMap<String, IgnoredAny> = serde_json::from_str(json)?;
    Ok(words_from_keys(entries.keys().map(String::as_str), config))
}

/// Sanitize raw keys into window-filtered, deduplicated words
///
/// Each key loses every non-letter character and is uppercased. Keys that end
/// up empty or outside the length window are skipped. When two keys sanitize
/// to the same word only the first is kept.
///
/// # Examples
/// ```
/// use bound_patterns::config::GeneratorConfig;
/// use bound_patterns::wordlists::loader::words_from_keys;
///
/// let words = words_from_keys(["crane", "don't", "DONT", "cat"], &GeneratorConfig::default());
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CRANE"]);
/// ```
pub fn words_from_keys<'k, I>(keys: I, config: &GeneratorConfig) -> Vec<Word>
where
    I: IntoIterator<Item = &'k str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words = Vec::new();
    let mut skipped = 0usize;
    let mut duplicates = 0usize;

    for key in keys {
        let text = sanitize(key);
        if text.is_empty() || !config.accepts_len(text.len()) {
            skipped += 1;
            continue;
        }
        if !seen.insert(text.clone()) {
            duplicates += 1;
            continue;
        }
        // Sanitized text is non-empty A-Z, so construction cannot fail
        if let Ok(word) = Word::new(text) {
            words.push(word);
        }
    }

    debug!(
        "Vocabulary: {} kept, {} outside window or empty, {} duplicates",
        words.len(),
        skipped,
        duplicates
    );
    words
}
