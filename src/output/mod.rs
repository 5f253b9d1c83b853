//! Terminal output formatting
//!
//! Display utilities for command results. Statistics printed here are
//! informational and never written to the catalog.

pub mod display;
pub mod formatters;

pub use display::{print_difficulty_result, print_generate_result, print_wordlist_result};
