//! Report formatting utilities for terminal output
//!
//! Text renditions of the two charts for terminals without the TUI.

use crate::reports::{ExpenseBreakdown, WeeklyComparison};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One bar per category, scaled to the share of the total
pub fn format_breakdown_bars(breakdown: &ExpenseBreakdown, symbol: &str, width: usize) -> String {
    if breakdown.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let label_width = breakdown
        .slices
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(8, 24);

    let mut output = String::new();
    for slice in &breakdown.slices {
        let label = slice.label();
        output.push_str(&format!(
            "{:<label_width$} {} {:>6} {}\n",
            truncate(label, label_width),
            format_bar(slice.percentage, 100.0, width),
            format_percentage(slice.percentage),
            slice.total.format_with_symbol(symbol),
        ));
    }
    output
}

/// Paired income and spend bars for each weekday
pub fn format_weekly_bars(weekly: &WeeklyComparison, width: usize) -> String {
    let max = weekly
        .days
        .iter()
        .flat_map(|d| [d.income.value(), d.spent.value()])
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for day in &weekly.days {
        output.push_str(&format!(
            "{:<3} income {} {:.2}\n",
            day.label,
            format_bar(day.income.value(), max, width),
            day.income.value()
        ));
        output.push_str(&format!(
            "{:<3} spent  {} {:.2}\n",
            "",
            format_bar(day.spent.value(), max, width),
            day.spent.value()
        ));
    }
    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
