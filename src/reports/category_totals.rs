//! Category totals
//!
//! Folds ledger entries into a per-category sum, keeping categories in the
//! order they were first seen. The result is derived on every read and is
//! never stored.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::models::{Amount, LedgerEntry};

/// Total for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category label (may be empty)
    pub category: String,
    /// Sum of entry amounts
    pub total: Amount,
    /// Number of entries folded in
    pub entry_count: usize,
}

/// Ordered mapping from category label to summed amount
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    rows: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    /// Aggregate entries in input order
    ///
    /// No sorting, no filtering, no rounding: every entry contributes its
    /// amount to its category, and an unseen category is appended.
    pub fn aggregate<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a LedgerEntry>,
    {
        let mut totals = Self::default();
        for entry in entries {
            totals.accumulate(&entry.category, entry.amount);
        }
        totals
    }

    fn accumulate(&mut self, category: &str, amount: Amount) {
        match self.index.get(category) {
            Some(&i) => {
                let row = &mut self.rows[i];
                row.total += amount;
                row.entry_count += 1;
            }
            None => {
                self.index.insert(category.to_string(), self.rows.len());
                self.rows.push(CategoryTotal {
                    category: category.to_string(),
                    total: amount,
                    entry_count: 1,
                });
            }
        }
    }

    /// Total for a category, if any entry used it
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.index.get(category).map(|&i| self.rows[i].total)
    }

    /// Rows in first-seen order
    pub fn rows(&self) -> &[CategoryTotal] {
        &self.rows
    }

    /// Category labels in first-seen order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.category.as_str())
    }

    /// Totals in first-seen order
    pub fn values(&self) -> impl Iterator<Item = Amount> + '_ {
        self.rows.iter().map(|r| r.total)
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum across all categories
    pub fn grand_total(&self) -> Amount {
        self.values().sum()
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for row in &self.rows {
            map.serialize_entry(&row.category, &row.total)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(category: &str, amount: f64) -> LedgerEntry {
        LedgerEntry::new("", "", category, Amount::new(amount))
    }

    #[test]
    fn test_example_fold() {
        let entries = vec![entry("food", 10.0), entry("food", 5.0), entry("rent", 100.0)];
        let totals = CategoryTotals::aggregate(&entries);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("food"), Some(Amount::new(15.0)));
        assert_eq!(totals.get("rent"), Some(Amount::new(100.0)));
        assert_eq!(totals.rows()[0].entry_count, 2);
    }

    #[test]
    fn test_empty_input() {
        let totals = CategoryTotals::aggregate(&Vec::<LedgerEntry>::new());
        assert!(totals.is_empty());
        assert!(totals.grand_total().is_zero());
    }

    #[test]
    fn test_first_seen_order_is_kept() {
        let entries = vec![
            entry("rent", 1.0),
            entry("10", 1.0),
            entry("food", 1.0),
            entry("rent", 1.0),
        ];
        let totals = CategoryTotals::aggregate(&entries);
        let labels: Vec<_> = totals.labels().collect();
        assert_eq!(labels, ["rent", "10", "food"]);
    }

    #[test]
    fn test_empty_category_and_negative_amounts() {
        let entries = vec![entry("", 20.0), entry("", -5.0), entry("misc", 0.0)];
        let totals = CategoryTotals::aggregate(&entries);

        assert_eq!(totals.get(""), Some(Amount::new(15.0)));
        assert_eq!(totals.get("misc"), Some(Amount::zero()));
    }

    #[test]
    fn test_no_rounding() {
        let entries = vec![entry("a", 0.1), entry("a", 0.2)];
        let totals = CategoryTotals::aggregate(&entries);
        assert_eq!(totals.get("a").unwrap().value(), 0.1 + 0.2);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let entries = vec![entry("rent", 100.0), entry("food", 15.0)];
        let json = serde_json::to_string(&CategoryTotals::aggregate(&entries)).unwrap();
        assert_eq!(json, r#"{"rent":100.0,"food":15.0}"#);
    }

    fn entries_strategy() -> impl Strategy<Value = Vec<LedgerEntry>> {
        prop::collection::vec(
            ("[a-d]{0,1}", -1_000i32..1_000i32)
                .prop_map(|(cat, cents)| entry(&cat, cents as f64)),
            0..40,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the totals sum to the sum of the input amounts.
        #[test]
        fn totals_sum_to_input_sum(entries in entries_strategy()) {
            let totals = CategoryTotals::aggregate(&entries);
            let input: f64 = entries.iter().map(|e| e.amount.value()).sum();
            prop_assert_eq!(totals.grand_total().value(), input);
        }

        /// Property: appending an entry grows the key count only for a new category,
        /// and the touched key grows by exactly the entry amount.
        #[test]
        fn appending_entry_updates_one_key(
            entries in entries_strategy(),
            cat in "[a-e]{0,1}",
            amount in -1_000i32..1_000i32,
        ) {
            let before = CategoryTotals::aggregate(&entries);
            let mut extended = entries.clone();
            extended.push(entry(&cat, amount as f64));
            let after = CategoryTotals::aggregate(&extended);

            match before.get(&cat) {
                Some(prev) => {
                    prop_assert_eq!(after.len(), before.len());
                    prop_assert_eq!(after.get(&cat), Some(prev + Amount::new(amount as f64)));
                }
                None => {
                    prop_assert_eq!(after.len(), before.len() + 1);
                    prop_assert_eq!(after.get(&cat), Some(Amount::new(amount as f64)));
                }
            }
        }
    }
}
