//! Weekly period series
//!
//! A fixed seven-slot sequence of per-weekday values, Monday first. Each
//! slot is edited independently.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::amount::Amount;

/// Number of slots in a period series
pub const DAYS_IN_WEEK: usize = 7;

/// Weekdays in slot order
pub const WEEKDAYS: [Weekday; DAYS_IN_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Two-letter chart label for a weekday
pub fn chart_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

/// Three-letter form label for a weekday
pub fn form_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Seven per-weekday values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodSeries([Amount; DAYS_IN_WEEK]);

impl Default for PeriodSeries {
    fn default() -> Self {
        Self::from_values([3000.0, 2000.0, 1500.0, 1800.0, 2200.0, 3500.0, 2500.0])
    }
}

impl PeriodSeries {
    /// Build a series from raw values, Monday first
    pub fn from_values(values: [f64; DAYS_IN_WEEK]) -> Self {
        Self(values.map(Amount::new))
    }

    /// A series with every slot set to `value`
    pub fn filled(value: Amount) -> Self {
        Self([value; DAYS_IN_WEEK])
    }

    /// Get the value at slot `index`
    pub fn get(&self, index: usize) -> Option<Amount> {
        self.0.get(index).copied()
    }

    /// Get the value for a weekday
    pub fn for_day(&self, day: Weekday) -> Amount {
        self.0[day.num_days_from_monday() as usize]
    }

    /// Replace slot `index`, returning the previous value
    ///
    /// Returns `None` (and changes nothing) when `index` is out of range.
    pub fn set(&mut self, index: usize, value: Amount) -> Option<Amount> {
        let slot = self.0.get_mut(index)?;
        Some(std::mem::replace(slot, value))
    }

    /// All values, Monday first
    pub fn values(&self) -> &[Amount; DAYS_IN_WEEK] {
        &self.0
    }

    /// Iterate `(weekday, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, Amount)> + '_ {
        WEEKDAYS.iter().copied().zip(self.0.iter().copied())
    }

    /// Sum over the week
    pub fn total(&self) -> Amount {
        self.0.iter().sum()
    }
}

impl Index<usize> for PeriodSeries {
    type Output = Amount;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let series = PeriodSeries::default();
        assert_eq!(series[0], Amount::new(3000.0));
        assert_eq!(series.for_day(Weekday::Sun), Amount::new(2500.0));
        assert_eq!(series.total(), Amount::new(16500.0));
    }

    #[test]
    fn test_set_changes_only_that_slot() {
        let before = PeriodSeries::default();
        let mut after = before;

        let previous = after.set(3, Amount::new(99.0));

        assert_eq!(previous, Some(Amount::new(1800.0)));
        for i in 0..DAYS_IN_WEEK {
            if i == 3 {
                assert_eq!(after[i], Amount::new(99.0));
            } else {
                assert_eq!(after[i].value().to_bits(), before[i].value().to_bits());
            }
        }
    }

    #[test]
    fn test_set_out_of_range() {
        let mut series = PeriodSeries::default();
        assert_eq!(series.set(7, Amount::new(1.0)), None);
        assert_eq!(series, PeriodSeries::default());
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = WEEKDAYS.iter().map(|d| chart_label(*d)).collect();
        assert_eq!(labels, ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]);
        assert_eq!(form_label(Weekday::Wed), "Wed");
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&PeriodSeries::filled(Amount::new(1.0))).unwrap();
        assert_eq!(json, "[1.0,1.0,1.0,1.0,1.0,1.0,1.0]");
    }
}
