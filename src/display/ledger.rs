//! Ledger display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Ledger;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format ledger entries as a table, numbered from 1
pub fn format_ledger_table(ledger: &Ledger, symbol: &str) -> String {
    if ledger.is_empty() {
        return "No entries.\n".to_string();
    }

    let rows = ledger.iter().enumerate().map(|(i, entry)| EntryRow {
        number: i + 1,
        date: entry.date.clone(),
        description: entry.description.clone(),
        category: entry.category.clone(),
        amount: entry.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()));

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!(
        "Total: {}\n",
        ledger.total().format_with_symbol(symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, LedgerEntry};

    #[test]
    fn test_empty_ledger() {
        assert_eq!(format_ledger_table(&Ledger::new(), "$"), "No entries.\n");
    }

    #[test]
    fn test_table_rows() {
        let ledger = Ledger::from(vec![
            LedgerEntry::new("2025-03-01", "Rent", "housing", Amount::new(1200.0)),
            LedgerEntry::new("2025-03-02", "Bread", "food", Amount::new(4.5)),
        ]);
        let text = format_ledger_table(&ledger, "€");

        assert!(text.contains("Description"));
        assert!(text.contains("housing"));
        assert!(text.contains("€4.50"));
        assert!(text.ends_with("Total: €1204.50\n"));
    }
}
