//! Bound Patterns - CLI
//!
//! Generates the bound-pattern catalog and the word data it is built from.

use anyhow::Result;
use bound_patterns::{
    commands::{
        DifficultyConfig, GenerateConfig, WordlistConfig, run_difficulty, run_generate,
        run_wordlist,
    },
    config::{
        DEFAULT_CATALOG_PATH, DEFAULT_DIFFICULTY_PATH, DEFAULT_LEN_MAX, DEFAULT_LEN_MIN,
        DEFAULT_MIN_BONUS, DEFAULT_MIN_CANDIDATES, DEFAULT_WORDLIST_PATH, GeneratorConfig,
    },
    output::{print_difficulty_result, print_generate_result, print_wordlist_result},
    sources::{DifficultyOptions, FrequencyOptions, SOURCE_LEN_MAX, SOURCE_LEN_MIN},
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bound-patterns",
    about = "Build the bound-pattern catalog for the letter-placement word game",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Generate options used when no subcommand is given
    #[command(flatten)]
    generate: GenerateArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the pattern catalog from a frequency wordlist (default)
    Generate(GenerateArgs),

    /// Build the frequency wordlist from a word-frequency table (xlsx/CSV/TSV)
    Wordlist(WordlistArgs),

    /// Build the difficulty tiers from an age-of-acquisition table (xlsx/CSV/TSV)
    Difficulty(DifficultyArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Frequency wordlist (JSON object of word -> score)
    #[arg(short, long, default_value = DEFAULT_WORDLIST_PATH)]
    input: PathBuf,

    /// Catalog output path
    #[arg(short, long, default_value = DEFAULT_CATALOG_PATH)]
    output: PathBuf,

    /// Shortest word length
    #[arg(long, default_value_t = DEFAULT_LEN_MIN)]
    len_min: usize,

    /// Longest word length
    #[arg(long, default_value_t = DEFAULT_LEN_MAX)]
    len_max: usize,

    /// Minimum number of words matching bound and required letter
    #[arg(long, default_value_t = DEFAULT_MIN_CANDIDATES)]
    min_candidates: usize,

    /// Minimum number of candidates containing the bonus letter
    #[arg(long, default_value_t = DEFAULT_MIN_BONUS)]
    min_bonus: usize,
}

#[derive(Args)]
struct WordlistArgs {
    /// Word-frequency table (workbook, or text: .csv is comma-separated, anything else tab)
    table: PathBuf,

    /// Wordlist output path
    #[arg(short, long, default_value = DEFAULT_WORDLIST_PATH)]
    output: PathBuf,

    /// Column holding the word
    #[arg(long, default_value = "Word")]
    word_column: String,

    /// Column holding the log-frequency score
    #[arg(long, default_value = "Lg10WF")]
    score_column: String,

    /// Shortest word kept
    #[arg(long, default_value_t = SOURCE_LEN_MIN)]
    min_len: usize,

    /// Longest word kept
    #[arg(long, default_value_t = SOURCE_LEN_MAX)]
    max_len: usize,

    /// Override the field delimiter
    #[arg(short, long)]
    delimiter: Option<char>,
}

#[derive(Args)]
struct DifficultyArgs {
    /// Age-of-acquisition table (workbook, or text: .csv is comma-separated, anything else tab)
    table: PathBuf,

    /// Difficulty map output path
    #[arg(short, long, default_value = DEFAULT_DIFFICULTY_PATH)]
    output: PathBuf,

    /// Column holding the word
    #[arg(long, default_value = "Word")]
    word_column: String,

    /// Column holding the age of acquisition in years
    #[arg(long, default_value = "AoA_Kup_lem")]
    aoa_column: String,

    /// Column holding the letter count
    #[arg(long, default_value = "Nletters")]
    length_column: String,

    /// Shortest word kept
    #[arg(long, default_value_t = SOURCE_LEN_MIN)]
    min_len: usize,

    /// Longest word kept
    #[arg(long, default_value_t = SOURCE_LEN_MAX)]
    max_len: usize,

    /// Override the field delimiter
    #[arg(short, long)]
    delimiter: Option<char>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("bound_patterns=debug,info")
    } else {
        EnvFilter::new("bound_patterns=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Bare invocation runs Generate with the top-level flags
    let command = cli
        .command
        .unwrap_or(Commands::Generate(cli.generate));

    match command {
        Commands::Generate(args) => run_generate_command(args),
        Commands::Wordlist(args) => run_wordlist_command(args),
        Commands::Difficulty(args) => run_difficulty_command(args),
    }
}

fn run_generate_command(args: GenerateArgs) -> Result<()> {
    let config = GenerateConfig {
        input: args.input,
        output: args.output,
        generator: GeneratorConfig {
            len_min: args.len_min,
            len_max: args.len_max,
            min_candidates: args.min_candidates,
            min_bonus: args.min_bonus,
        },
    };
    let result = run_generate(config)?;
    print_generate_result(&result);
    Ok(())
}

fn run_wordlist_command(args: WordlistArgs) -> Result<()> {
    let config = WordlistConfig {
        table: args.table,
        output: args.output,
        delimiter: args.delimiter,
        options: FrequencyOptions {
            word_column: args.word_column,
            score_column: args.score_column,
            min_len: args.min_len,
            max_len: args.max_len,
        },
    };
    let result = run_wordlist(config)?;
    print_wordlist_result(&result);
    Ok(())
}

fn run_difficulty_command(args: DifficultyArgs) -> Result<()> {
    let config = DifficultyConfig {
        table: args.table,
        output: args.output,
        delimiter: args.delimiter,
        options: DifficultyOptions {
            word_column: args.word_column,
            aoa_column: args.aoa_column,
            length_column: args.length_column,
            min_len: args.min_len,
            max_len: args.max_len,
        },
    };
    let result = run_difficulty(config)?;
    print_difficulty_result(&result);
    Ok(())
}
