//! CSV export
//!
//! Ledger rows are written in the same column order the importer reads,
//! so an exported ledger can be fed back to `verzi budget`.

use std::io::Write;

use crate::error::{VerziError, VerziResult};
use crate::models::{EntryField, Ledger};

/// Export ledger entries to CSV with a header row
pub fn export_ledger_csv<W: Write>(ledger: &Ledger, writer: W) -> VerziResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["date", "description", "category", "amount"])
        .map_err(|e| VerziError::Export(e.to_string()))?;

    for entry in ledger {
        let record = EntryField::ALL.map(|field| entry.field_text(field));
        csv.write_record(&record)
            .map_err(|e| VerziError::Export(e.to_string()))?;
    }

    csv.flush().map_err(|e| VerziError::Export(e.to_string()))?;
    Ok(())
}
