//! Export module for VerziBiz
//!
//! Writes budget data out in three formats:
//! - CSV: ledger entries (re-importable), per-chart rows, and the sectioned dashboard
//! - JSON: machine-readable dashboard and chart payloads
//! - YAML: human-readable dashboard and chart payloads

pub mod csv;
pub mod json;
pub mod yaml;

use clap::ValueEnum;

pub use csv::export_ledger_csv;
pub use json::{export_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Output format for exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV rows
    Csv,
    /// JSON document
    #[default]
    Json,
    /// YAML document, human-readable
    Yaml,
}
