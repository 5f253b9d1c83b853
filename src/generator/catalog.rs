//! Catalog assembly and serialization

use crate::core::BoundPattern;
use crate::persistence::{JsonStyle, PersistError, write_json_atomic};
use std::path::Path;
use tracing::info;

/// Sorted collection of emitted patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    patterns: Vec<BoundPattern>,
}

impl Catalog {
    /// Sort patterns by `(len, side, bound, required, bonus)`
    ///
    /// The key is unique per combination, so the order is total.
    #[must_use]
    pub fn assemble(mut patterns: Vec<BoundPattern>) -> Self {
        patterns.sort_unstable_by_key(BoundPattern::sort_key);
        Self { patterns }
    }

    /// Patterns in catalog order
    #[must_use]
    pub fn patterns(&self) -> &[BoundPattern] {
        &self.patterns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pretty-printed JSON array, two-space indent
    ///
    /// # Errors
    ///
    /// Returns a serialization error; not expected for well-formed patterns.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.patterns)
    }

    /// Parse a previously written catalog, re-sorting it
    ///
    /// # Errors
    ///
    /// Returns a parse error if `json` is not an array of patterns.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let patterns: Vec<BoundPattern> = serde_json::from_str(json)?;
        Ok(Self::assemble(patterns))
    }

    /// Write the catalog atomically to `path`
    ///
    /// # Errors
    ///
    /// Returns `PersistError` if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), PersistError> {
        write_json_atomic(path, &self.patterns, JsonStyle::Pretty)?;
        info!("Wrote {} patterns to {}", self.len(), path.display());
        Ok(())
    }
}
