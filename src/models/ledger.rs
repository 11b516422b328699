//! Ledger model
//!
//! An append-only, ordered list of expense entries. Entries are edited in
//! place by index; there is no removal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::{Amount, AmountParseError};
use super::entry::{EntryField, LedgerEntry};

/// Ordered collection of ledger entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank entry and return its index
    pub fn add_blank(&mut self) -> usize {
        self.push(LedgerEntry::blank())
    }

    /// Append a filled entry and return its index
    pub fn push(&mut self, entry: LedgerEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Edit one field of the entry at `index`
    pub fn update(
        &mut self,
        index: usize,
        field: EntryField,
        raw: &str,
    ) -> Result<&LedgerEntry, LedgerEditError> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(LedgerEditError::NoSuchEntry(index))?;
        entry
            .set_field(field, raw)
            .map_err(LedgerEditError::InvalidAmount)?;
        Ok(entry)
    }

    /// Get the entry at `index`
    pub fn get(&self, index: usize) -> Option<&LedgerEntry> {
        self.entries.get(index)
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, LedgerEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every entry amount
    pub fn total(&self) -> Amount {
        self.entries.iter().map(|e| e.amount).sum()
    }
}

impl From<Vec<LedgerEntry>> for Ledger {
    fn from(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a LedgerEntry;
    type IntoIter = std::slice::Iter<'a, LedgerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Errors from editing a ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEditError {
    NoSuchEntry(usize),
    InvalidAmount(AmountParseError),
}

impl fmt::Display for LedgerEditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchEntry(index) => write!(f, "No ledger entry #{}", index + 1),
            Self::InvalidAmount(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LedgerEditError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_blank_appends() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.add_blank(), 0);
        assert_eq!(ledger.add_blank(), 1);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(1), Some(&LedgerEntry::blank()));
    }

    #[test]
    fn test_update_only_touches_target() {
        let mut ledger = Ledger::new();
        ledger.add_blank();
        ledger.add_blank();

        ledger.update(1, EntryField::Amount, "42").unwrap();

        assert!(ledger.get(0).unwrap().amount.is_zero());
        assert_eq!(ledger.get(1).unwrap().amount, Amount::new(42.0));
    }

    #[test]
    fn test_update_out_of_range() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.update(0, EntryField::Date, "x").unwrap_err(),
            LedgerEditError::NoSuchEntry(0)
        );
    }

    #[test]
    fn test_total() {
        let ledger = Ledger::from(vec![
            LedgerEntry::new("", "", "food", Amount::new(10.0)),
            LedgerEntry::new("", "", "refund", Amount::new(-4.0)),
        ]);
        assert_eq!(ledger.total(), Amount::new(6.0));
    }
}
