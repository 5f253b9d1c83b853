//! Display functions for command results

use super::formatters::{create_progress_bar, format_percent, format_summary};
use crate::commands::{DifficultyResult, GenerateResult, WordlistResult};
use colored::Colorize;

/// Print the statistics of a generation run
pub fn print_generate_result(result: &GenerateResult) {
    let stats = &result.stats;
    let generator = &result.config.generator;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOUND PATTERN CATALOG".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Vocabulary:".bright_cyan().bold());
    println!(
        "   Words ({}-{} letters): {}",
        generator.len_min, generator.len_max, result.vocabulary
    );

    println!("\n🔢 {}", "Combinations:".bright_cyan().bold());
    println!(
        "   Total possible (length × side × bound × required): {}",
        stats.total_possible
    );
    println!(
        "   Candidate count (all):  {}",
        format_summary(stats.all)
    );

    println!("\n📈 {}", "Kept patterns:".bright_cyan().bold());
    if stats.kept == 0 {
        println!(
            "   {}",
            format!(
                "0 kept (try lowering min candidates, currently {})",
                generator.min_candidates
            )
            .yellow()
        );
    } else {
        let bar = create_progress_bar(stats.kept_ratio, 1.0, 30);
        println!(
            "   Kept (min candidates={}, min bonus={}): {}",
            generator.min_candidates,
            generator.min_bonus,
            format!("{}", stats.kept).bright_yellow().bold()
        );
        println!(
            "   Coverage: [{}] {}",
            bar.green(),
            format_percent(stats.kept_ratio)
        );
        println!(
            "   Candidate count (kept): {}",
            format_summary(stats.kept_summary)
        );
    }
    println!(
        "   Dropped: {} below candidate threshold, {} without bonus",
        stats.dropped_too_few, stats.dropped_no_bonus
    );

    println!(
        "\n{}",
        format!(
            "✅ Wrote {} patterns to {}",
            result.catalog.len(),
            result.config.output.display()
        )
        .green()
        .bold()
    );
}

/// Print the result of building the frequency wordlist
pub fn print_wordlist_result(result: &WordlistResult) {
    println!(
        "{}",
        format!(
            "✅ Wrote {} entries to {}",
            result.entries,
            result.output.display()
        )
        .green()
        .bold()
    );
    println!("   Skipped rows: {}", result.skipped);
}

/// Print the result of building the difficulty map
pub fn print_difficulty_result(result: &DifficultyResult) {
    println!(
        "{}",
        format!(
            "✅ Wrote {} entries to {}",
            result.entries,
            result.output.display()
        )
        .green()
        .bold()
    );
    println!("   Skipped rows: {}", result.skipped);

    println!("\n📊 {}", "Tiers:".bright_cyan().bold());
    let max_count = result.tier_counts.iter().copied().max().unwrap_or(0);
    for (idx, &count) in result.tier_counts.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {}: {} {count:6}", idx + 1, bar.green());
    }
}
