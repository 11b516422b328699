//! Budget session service
//!
//! Owns the in-memory state of the budget tracker (monthly income, the
//! expense ledger, the weekly spend series) and re-derives every summary
//! from that state on read.

use tracing::debug;

use crate::config::settings::BudgetDefaults;
use crate::error::{VerziError, VerziResult};
use crate::models::{Amount, EntryField, Ledger, LedgerEditError, LedgerEntry, PeriodSeries};
use crate::reports::{CategoryTotals, Dashboard, ExpenseBreakdown, WeeklyComparison};

/// State behind the budget tracker screen
#[derive(Debug, Clone)]
pub struct BudgetSession {
    monthly_income: Amount,
    ledger: Ledger,
    weekly_spend: PeriodSeries,
    days_per_month: u32,
}

impl Default for BudgetSession {
    fn default() -> Self {
        Self::from_defaults(&BudgetDefaults::default())
    }
}

impl BudgetSession {
    /// Start a session from configured defaults
    pub fn from_defaults(defaults: &BudgetDefaults) -> Self {
        Self {
            monthly_income: defaults.monthly_income,
            ledger: Ledger::new(),
            weekly_spend: defaults.weekly_spend,
            days_per_month: defaults.days_per_month,
        }
    }

    /// Start a session with an existing ledger
    pub fn with_ledger(mut self, ledger: Ledger) -> Self {
        self.ledger = ledger;
        self
    }

    // === Income ===

    pub fn monthly_income(&self) -> Amount {
        self.monthly_income
    }

    pub fn set_income(&mut self, income: Amount) {
        debug!(income = income.value(), "monthly income updated");
        self.monthly_income = income;
    }

    /// Set income from raw input text
    pub fn set_income_input(&mut self, raw: &str) -> VerziResult<Amount> {
        let income = Amount::parse(raw).map_err(|e| VerziError::Validation(e.to_string()))?;
        self.set_income(income);
        Ok(income)
    }

    // === Ledger ===

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Append a blank expense row and return its index
    pub fn add_entry(&mut self) -> usize {
        let index = self.ledger.add_blank();
        debug!(index, "blank ledger entry added");
        index
    }

    /// Append a filled expense row and return its index
    pub fn push_entry(&mut self, entry: LedgerEntry) -> usize {
        self.ledger.push(entry)
    }

    /// Edit one field of an expense row
    pub fn update_entry(
        &mut self,
        index: usize,
        field: EntryField,
        raw: &str,
    ) -> VerziResult<&LedgerEntry> {
        let entry = self.ledger.update(index, field, raw).map_err(|e| match e {
            LedgerEditError::NoSuchEntry(i) => VerziError::entry_not_found(i),
            LedgerEditError::InvalidAmount(e) => VerziError::Validation(e.to_string()),
        })?;
        debug!(index, field = %field, "ledger entry updated");
        Ok(entry)
    }

    // === Weekly spend ===

    pub fn weekly_spend(&self) -> &PeriodSeries {
        &self.weekly_spend
    }

    /// Set the spend for weekday slot `index` (0 = Monday)
    pub fn set_daily_spend(&mut self, index: usize, value: Amount) -> VerziResult<Amount> {
        let previous = self
            .weekly_spend
            .set(index, value)
            .ok_or_else(|| VerziError::weekday_not_found(index))?;
        debug!(index, value = value.value(), "daily spend updated");
        Ok(previous)
    }

    /// Set a weekday's spend from raw input text
    pub fn set_daily_spend_input(&mut self, index: usize, raw: &str) -> VerziResult<Amount> {
        let value = Amount::parse(raw).map_err(|e| VerziError::Validation(e.to_string()))?;
        self.set_daily_spend(index, value)?;
        Ok(value)
    }

    pub fn days_per_month(&self) -> u32 {
        self.days_per_month
    }

    // === Derived views ===

    /// Category totals, recomputed from the current ledger
    pub fn category_totals(&self) -> CategoryTotals {
        CategoryTotals::aggregate(&self.ledger)
    }

    /// Pie breakdown of the current ledger
    pub fn breakdown(&self) -> ExpenseBreakdown {
        ExpenseBreakdown::from_totals(&self.category_totals())
    }

    /// Income vs spend for the week
    pub fn weekly(&self) -> WeeklyComparison {
        WeeklyComparison::new(self.monthly_income, self.days_per_month, &self.weekly_spend)
    }

    /// Full dashboard snapshot
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(
            self.monthly_income,
            &self.ledger,
            &self.weekly_spend,
            self.days_per_month,
        )
    }
}
