//! Expense breakdown
//!
//! Turns category totals into pie slices: one slice per category, in
//! first-seen order, colored from a fixed palette.

use serde::Serialize;
use std::io::Write;

use super::category_totals::CategoryTotals;
use super::chart::{ChartData, Dataset, Fill};
use crate::error::{VerziError, VerziResult};
use crate::models::Amount;

/// Slice colors, reused in order when there are more categories
pub const PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#8A2BE2", "#32CD32"];

/// Palette color for the slice at `position`
pub fn palette_color(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub category: String,
    pub total: Amount,
    /// Share of the absolute total, 0-100
    pub percentage: f64,
    pub color: &'static str,
}

impl Slice {
    /// Category as shown to the user; the empty category reads "(none)"
    pub fn label(&self) -> &str {
        if self.category.is_empty() {
            "(none)"
        } else {
            &self.category
        }
    }
}

/// Expense breakdown by category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseBreakdown {
    pub slices: Vec<Slice>,
    pub total: Amount,
}

impl ExpenseBreakdown {
    /// Build slices from category totals
    pub fn from_totals(totals: &CategoryTotals) -> Self {
        let abs_total: f64 = totals.values().map(|a| a.value().abs()).sum();

        let slices = totals
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| Slice {
                category: row.category.clone(),
                total: row.total,
                percentage: if abs_total == 0.0 {
                    0.0
                } else {
                    row.total.value().abs() / abs_total * 100.0
                },
                color: palette_color(i),
            })
            .collect();

        Self {
            slices,
            total: totals.grand_total(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Pie chart payload
    pub fn to_chart(&self) -> ChartData {
        ChartData {
            labels: self.slices.iter().map(|s| s.category.clone()).collect(),
            datasets: vec![Dataset {
                label: None,
                data: self.slices.iter().map(|s| s.total.value()).collect(),
                background_color: Fill::PerPoint(
                    self.slices.iter().map(|s| s.color.to_string()).collect(),
                ),
            }],
        }
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.slices.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("{:<30} {:>14} {:>8}\n", "Category", "Amount", "%"));
        output.push_str(&"-".repeat(54));
        output.push('\n');

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<30} {:>14} {:>7.1}%\n",
                slice.label(),
                slice.total.format_with_symbol(symbol),
                slice.percentage
            ));
        }

        output.push_str(&"-".repeat(54));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>14}\n",
            "TOTAL",
            self.total.format_with_symbol(symbol)
        ));
        output
    }

    /// Export the breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> VerziResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Amount", "Percentage", "Color"])
            .map_err(|e| VerziError::Export(e.to_string()))?;

        for slice in &self.slices {
            csv.write_record([
                slice.category.clone(),
                slice.total.value().to_string(),
                format!("{:.2}", slice.percentage),
                slice.color.to_string(),
            ])
            .map_err(|e| VerziError::Export(e.to_string()))?;
        }

        csv.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LedgerEntry;

    fn breakdown(entries: &[(&str, f64)]) -> ExpenseBreakdown {
        let entries: Vec<_> = entries
            .iter()
            .map(|(c, a)| LedgerEntry::new("", "", *c, Amount::new(*a)))
            .collect();
        ExpenseBreakdown::from_totals(&CategoryTotals::aggregate(&entries))
    }

    #[test]
    fn test_percentages() {
        let b = breakdown(&[("food", 25.0), ("rent", 75.0)]);
        assert_eq!(b.slices[0].percentage, 25.0);
        assert_eq!(b.slices[1].percentage, 75.0);
        assert_eq!(b.total, Amount::new(100.0));
    }

    #[test]
    fn test_zero_total_has_zero_percentages() {
        let b = breakdown(&[("a", 0.0)]);
        assert_eq!(b.slices[0].percentage, 0.0);
    }

    #[test]
    fn test_palette_cycles() {
        let b = breakdown(&[
            ("a", 1.0),
            ("b", 1.0),
            ("c", 1.0),
            ("d", 1.0),
            ("e", 1.0),
            ("f", 1.0),
        ]);
        assert_eq!(b.slices[5].color, PALETTE[0]);
        assert_eq!(b.slices[4].color, "#32CD32");
    }

    #[test]
    fn test_chart_payload() {
        let chart = breakdown(&[("food", 15.0), ("rent", 100.0)]).to_chart();
        assert_eq!(chart.labels, ["food", "rent"]);
        assert_eq!(chart.datasets[0].data, [15.0, 100.0]);
    }

    #[test]
    fn test_format_terminal_names_empty_category() {
        let text = breakdown(&[("", 5.0)]).format_terminal("$");
        assert!(text.contains("(none)"));
        assert!(!text.contains("(uncategorized)"));
        assert!(text.contains("$5.00"));
    }

    #[test]
    fn test_export_csv() {
        let mut out = Vec::new();
        breakdown(&[("food", 10.0)]).export_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Category,Amount,Percentage,Color\nfood,10,100.00,#FF6384\n");
    }
}
