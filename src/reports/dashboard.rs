//! Budget dashboard
//!
//! Everything the budget tracker screen shows, in one serializable value.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use super::breakdown::ExpenseBreakdown;
use super::category_totals::CategoryTotals;
use super::chart::ChartData;
use super::weekly::WeeklyComparison;
use crate::error::{VerziError, VerziResult};
use crate::models::{Amount, EntryField, Ledger, LedgerEntry, PeriodSeries};

/// Snapshot of a budget session
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub monthly_income: Amount,
    pub weekly_spend: PeriodSeries,
    pub entries: Vec<LedgerEntry>,
    pub category_totals: CategoryTotals,
    pub expense_breakdown: ChartData,
    pub income_vs_expenses: ChartData,
    #[serde(skip)]
    pub breakdown: ExpenseBreakdown,
    #[serde(skip)]
    pub weekly: WeeklyComparison,
}

impl Dashboard {
    /// Derive every view from the current inputs
    pub fn build(
        monthly_income: Amount,
        ledger: &Ledger,
        weekly_spend: &PeriodSeries,
        days_per_month: u32,
    ) -> Self {
        let category_totals = CategoryTotals::aggregate(ledger);
        let breakdown = ExpenseBreakdown::from_totals(&category_totals);
        let weekly = WeeklyComparison::new(monthly_income, days_per_month, weekly_spend);

        Self {
            generated_at: Utc::now(),
            monthly_income,
            weekly_spend: *weekly_spend,
            entries: ledger.entries().to_vec(),
            expense_breakdown: breakdown.to_chart(),
            income_vs_expenses: weekly.to_chart(),
            category_totals,
            breakdown,
            weekly,
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Budget Dashboard\n");
        output.push_str(&"=".repeat(54));
        output.push('\n');
        output.push_str(&format!(
            "Monthly Income: {}\n",
            self.monthly_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!("Entries: {}\n\n", self.entries.len()));

        output.push_str("Income vs Expenses\n");
        output.push_str(&self.weekly.format_terminal(symbol));
        output.push('\n');

        output.push_str("Expense Breakdown\n");
        output.push_str(&self.breakdown.format_terminal(symbol));
        output
    }

    /// Export the dashboard to CSV
    ///
    /// Sections follow one another in a single file, each opened by its own
    /// header row: income, ledger entries, category totals, then the week.
    pub fn export_csv<W: Write>(&self, writer: W) -> VerziResult<()> {
        let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        let mut write = |record: Vec<String>| {
            csv.write_record(&record)
                .map_err(|e| VerziError::Export(e.to_string()))
        };

        write(vec!["Monthly Income".into(), self.monthly_income.value().to_string()])?;

        write(vec!["date".into(), "description".into(), "category".into(), "amount".into()])?;
        for entry in &self.entries {
            write(EntryField::ALL.map(|field| entry.field_text(field)).to_vec())?;
        }

        write(vec!["Category".into(), "Total".into(), "Percentage".into()])?;
        for slice in &self.breakdown.slices {
            write(vec![
                slice.category.clone(),
                slice.total.value().to_string(),
                format!("{:.2}", slice.percentage),
            ])?;
        }

        write(vec!["Day".into(), "Income".into(), "Spent".into()])?;
        for day in &self.weekly.days {
            write(vec![
                day.label.to_string(),
                day.income.value().to_string(),
                day.spent.value().to_string(),
            ])?;
        }

        csv.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        Ok(())
    }
}
