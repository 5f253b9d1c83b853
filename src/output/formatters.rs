//! Formatting utilities for terminal output

use crate::generator::CountSummary;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format candidate-count summary as `min=…, median=…, max=…`
#[must_use]
pub fn format_summary(summary: Option<CountSummary>) -> String {
    summary.map_or_else(
        || "n/a".to_string(),
        |s| format!("min={}, median={}, max={}", s.min, s.median, s.max),
    )
}

/// Format a 0-1 ratio as a percentage with one decimal
#[must_use]
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
