//! Word lists for pattern generation
//!
//! The vocabulary is read from a frequency wordlist file; only its keys matter.

pub mod loader;

pub use loader::{LoadError, load_from_file, words_from_json, words_from_keys};
