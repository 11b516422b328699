//! YAML export
//!
//! Same payloads as the JSON export, prefixed with a comment header.

use serde::Serialize;
use std::io::Write;

use crate::error::{VerziError, VerziResult};

/// Write a serializable payload as YAML under a `# title` header
pub fn export_yaml<T, W>(value: &T, writer: &mut W, title: &str) -> VerziResult<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let export_err = |e: std::io::Error| VerziError::Export(e.to_string());

    writeln!(writer, "# VerziBiz {}", title).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().to_rfc3339()).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", env!("CARGO_PKG_VERSION")).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, value).map_err(|e| VerziError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, PeriodSeries};
    use crate::reports::WeeklyComparison;

    #[test]
    fn test_yaml_export() {
        let weekly = WeeklyComparison::new(Amount::new(3000.0), 30, &PeriodSeries::default());

        let mut out = Vec::new();
        export_yaml(&weekly.to_chart(), &mut out, "Income vs Expenses").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# VerziBiz Income vs Expenses\n"));

        let body: String = text
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: crate::reports::ChartData = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.labels.len(), 7);
        assert_eq!(parsed.datasets[0].data[0], 100.0);
    }
}
