//! Command implementations

pub mod difficulty;
pub mod generate;
pub mod wordlist;

pub use difficulty::{DifficultyConfig, DifficultyResult, run_difficulty};
pub use generate::{GenerateConfig, GenerateResult, run_generate};
pub use wordlist::{WordlistConfig, WordlistResult, run_wordlist};
