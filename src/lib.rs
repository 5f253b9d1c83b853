//! Bound Patterns
//!
//! Builds the catalog of "bound patterns" for a letter-placement word game: a
//! word length, a letter fixed at the start or end, a letter required anywhere,
//! and a bonus letter chosen to cover as many candidate words as possible.
//!
//! # Quick Start
//!
//! ```rust
//! use bound_patterns::config::GeneratorConfig;
//! use bound_patterns::generator::{Catalog, PatternGenerator};
//! use bound_patterns::wordlists::words_from_keys;
//!
//! let config = GeneratorConfig {
//!     len_min: 5,
//!     len_max: 5,
//!     min_candidates: 2,
//!     min_bonus: 1,
//! };
//! let words = words_from_keys(["crane", "crate", "trust"], &config);
//!
//! let generation = PatternGenerator::new(&words, config).generate();
//! assert_eq!(generation.total_possible, 2 * 26 * 26);
//!
//! let catalog = Catalog::assemble(generation.patterns);
//! let first = &catalog.patterns()[0];
//! println!("{first}");
//! ```

// Core domain types
pub mod core;

// Generation tunables
pub mod config;

// Vocabulary loading
pub mod wordlists;

// Indexing, enumeration, bonus selection, catalog assembly
pub mod generator;

// Upstream spreadsheet builders
pub mod sources;

// Atomic JSON output
pub mod persistence;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
