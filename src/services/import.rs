//! CSV ledger import
//!
//! Reads expense rows (`date,description,category,amount`) into a ledger
//! for one-shot reporting. A leading header row is detected and skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{VerziError, VerziResult};
use crate::models::{Amount, Ledger, LedgerEntry};

/// Column layout of an import file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date_column: usize,
    pub description_column: usize,
    pub category_column: usize,
    pub amount_column: usize,
    pub delimiter: u8,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            description_column: 1,
            category_column: 2,
            amount_column: 3,
            delimiter: b',',
        }
    }
}

impl ColumnMapping {
    fn max_column(&self) -> usize {
        self.date_column
            .max(self.description_column)
            .max(self.category_column)
            .max(self.amount_column)
    }

    /// Whether a record looks like a header row
    fn is_header(&self, record: &StringRecord) -> bool {
        record
            .get(self.amount_column)
            .map(|f| f.trim().eq_ignore_ascii_case("amount"))
            .unwrap_or(false)
    }

    fn parse_record(&self, record: &StringRecord, line: u64) -> VerziResult<LedgerEntry> {
        if record.len() <= self.max_column() {
            return Err(VerziError::Import(format!(
                "line {}: expected at least {} columns, found {}",
                line,
                self.max_column() + 1,
                record.len()
            )));
        }

        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        let amount = Amount::parse(&field(self.amount_column))
            .map_err(|e| VerziError::Import(format!("line {}: {}", line, e)))?;

        Ok(LedgerEntry::new(
            field(self.date_column),
            field(self.description_column),
            field(self.category_column),
            amount,
        ))
    }
}

/// Read a ledger from CSV text
pub fn import_ledger<R: Read>(reader: R, mapping: &ColumnMapping) -> VerziResult<Ledger> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(mapping.delimiter)
        .from_reader(reader);

    let mut ledger = Ledger::new();
    for (i, record) in csv.records().enumerate() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(i as u64 + 1);

        if i == 0 && mapping.is_header(&record) {
            debug!("skipping header row");
            continue;
        }
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }

        ledger.push(mapping.parse_record(&record, line)?);
    }

    info!(entries = ledger.len(), "ledger imported");
    Ok(ledger)
}

/// Read a ledger from a CSV file
pub fn import_ledger_file(path: &Path, mapping: &ColumnMapping) -> VerziResult<Ledger> {
    let file = File::open(path).map_err(|e| {
        VerziError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;
    import_ledger(file, mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_with_header() {
        let data = "date,description,category,amount\n\
                    2025-01-02,Groceries,food,10\n\
                    2025-01-03,Snacks,food,5\n\
                    2025-01-04,January,rent,100\n";
        let ledger = import_ledger(data.as_bytes(), &ColumnMapping::default()).unwrap();

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.get(2).unwrap().category, "rent");
        assert_eq!(ledger.total(), Amount::new(115.0));
    }

    #[test]
    fn test_import_without_header_and_blank_fields() {
        let data = ",,,\n,Coffee,,3.5\n";
        let ledger = import_ledger(data.as_bytes(), &ColumnMapping::default()).unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(0).unwrap().category, "");
        assert_eq!(ledger.get(0).unwrap().amount, Amount::new(3.5));
    }

    #[test]
    fn test_bad_amount_reports_line() {
        let data = "date,description,category,amount\n2025-01-02,x,food,lots\n";
        let err = import_ledger(data.as_bytes(), &ColumnMapping::default()).unwrap_err();
        assert!(matches!(err, VerziError::Import(ref m) if m.starts_with("line 2")));
    }

    #[test]
    fn test_short_row_rejected() {
        let err = import_ledger("a,b\n".as_bytes(), &ColumnMapping::default()).unwrap_err();
        assert!(matches!(err, VerziError::Import(_)));
    }

    #[test]
    fn test_import_file_with_semicolons() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "2025-01-02;Bus;travel;2.75").unwrap();

        let mapping = ColumnMapping {
            delimiter: b';',
            ..ColumnMapping::default()
        };
        let ledger = import_ledger_file(file.path(), &mapping).unwrap();
        assert_eq!(ledger.get(0).unwrap().description, "Bus");
    }
}
