//! Income vs spend for the week
//!
//! Spreads monthly income evenly over the days of a month and sets it
//! beside each weekday's spend.

use chrono::Weekday;
use serde::Serialize;
use std::io::Write;

use super::chart::{ChartData, Dataset, Fill};
use crate::error::{VerziError, VerziResult};
use crate::models::period::chart_label;
use crate::models::{Amount, PeriodSeries};

/// Bar color for the income series
pub const INCOME_COLOR: &str = "#36A2EB";

/// Bar color for the spend series
pub const SPENT_COLOR: &str = "#FF6384";

/// One weekday's pair of bars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayComparison {
    pub label: &'static str,
    pub income: Amount,
    pub spent: Amount,
}

impl DayComparison {
    /// Income left after the day's spend
    pub fn balance(&self) -> Amount {
        self.income - self.spent
    }
}

/// Seven-day income vs spend comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyComparison {
    pub daily_income: Amount,
    pub days: Vec<DayComparison>,
}

impl WeeklyComparison {
    /// Build the comparison
    ///
    /// A `days_per_month` of zero is treated as one so the income series
    /// stays finite.
    pub fn new(monthly_income: Amount, days_per_month: u32, spend: &PeriodSeries) -> Self {
        let divisor = days_per_month.max(1) as f64;
        let daily_income = Amount::new(monthly_income.value() / divisor);

        let days = spend
            .iter()
            .map(|(day, spent)| DayComparison {
                label: chart_label(day),
                income: daily_income,
                spent,
            })
            .collect();

        Self { daily_income, days }
    }

    /// Total spend over the week
    pub fn total_spent(&self) -> Amount {
        self.days.iter().map(|d| d.spent).sum()
    }

    /// Total income over the week
    pub fn total_income(&self) -> Amount {
        self.days.iter().map(|d| d.income).sum()
    }

    /// Days where spend exceeded income
    pub fn overspent_days(&self) -> Vec<&DayComparison> {
        self.days.iter().filter(|d| d.spent > d.income).collect()
    }

    /// Comparison for a weekday
    pub fn day(&self, day: Weekday) -> &DayComparison {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Bar chart payload
    pub fn to_chart(&self) -> ChartData {
        ChartData {
            labels: self.days.iter().map(|d| d.label.to_string()).collect(),
            datasets: vec![
                Dataset {
                    label: Some("Income".into()),
                    data: self.days.iter().map(|d| d.income.value()).collect(),
                    background_color: Fill::Single(INCOME_COLOR.into()),
                },
                Dataset {
                    label: Some("Spent".into()),
                    data: self.days.iter().map(|d| d.spent.value()).collect(),
                    background_color: Fill::Single(SPENT_COLOR.into()),
                },
            ],
        }
    }

    /// Format the comparison for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<6} {:>14} {:>14} {:>14}\n",
            "Day", "Income", "Spent", "Balance"
        ));
        output.push_str(&"-".repeat(51));
        output.push('\n');

        for day in &self.days {
            output.push_str(&format!(
                "{:<6} {:>14} {:>14} {:>14}\n",
                day.label,
                day.income.format_with_symbol(symbol),
                day.spent.format_with_symbol(symbol),
                day.balance().format_with_symbol(symbol),
            ));
        }

        output.push_str(&"-".repeat(51));
        output.push('\n');
        output.push_str(&format!(
            "{:<6} {:>14} {:>14} {:>14}\n",
            "Week",
            self.total_income().format_with_symbol(symbol),
            self.total_spent().format_with_symbol(symbol),
            (self.total_income() - self.total_spent()).format_with_symbol(symbol),
        ));
        output
    }

    /// Export the comparison to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> VerziResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Day", "Income", "Spent"])
            .map_err(|e| VerziError::Export(e.to_string()))?;

        for day in &self.days {
            csv.write_record([
                day.label.to_string(),
                day.income.value().to_string(),
                day.spent.value().to_string(),
            ])
            .map_err(|e| VerziError::Export(e.to_string()))?;
        }

        csv.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        Ok(())
    }
}
