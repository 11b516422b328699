//! JSON export
//!
//! Wraps a dashboard with a schema version so downstream tooling can tell
//! export layouts apart.

use serde::Serialize;
use std::io::Write;

use crate::error::{VerziError, VerziResult};
use crate::reports::Dashboard;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard export document
#[derive(Debug, Serialize)]
pub struct DashboardExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Application version that created the export
    pub app_version: &'static str,

    #[serde(flatten)]
    pub dashboard: &'a Dashboard,
}

impl<'a> DashboardExport<'a> {
    pub fn new(dashboard: &'a Dashboard) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            dashboard,
        }
    }
}

/// Write any serializable payload as JSON
pub fn export_json<T, W>(value: &T, writer: &mut W, pretty: bool) -> VerziResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)
    } else {
        serde_json::to_writer(&mut *writer, value)
    }
    .map_err(|e| VerziError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| VerziError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Ledger, LedgerEntry, PeriodSeries};

    fn dashboard() -> Dashboard {
        let ledger = Ledger::from(vec![
            LedgerEntry::new("2025-03-01", "Rent", "housing", Amount::new(1200.0)),
            LedgerEntry::new("2025-03-02", "Bread", "food", Amount::new(4.5)),
        ]);
        Dashboard::build(Amount::new(20000.0), &ledger, &PeriodSeries::default(), 30)
    }

    #[test]
    fn test_dashboard_export_is_flat() {
        let dashboard = dashboard();
        let mut out = Vec::new();
        export_json(&DashboardExport::new(&dashboard), &mut out, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["monthly_income"], 20000.0);
        assert_eq!(value["category_totals"]["housing"], 1200.0);
        assert_eq!(value["expense_breakdown"]["labels"][1], "food");
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let dashboard = dashboard();
        let mut out = Vec::new();
        export_json(&dashboard.expense_breakdown, &mut out, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n  \"labels\""));
        assert!(text.ends_with('\n'));
    }
}
