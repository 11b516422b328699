//! CLI commands for the budget tracker
//!
//! Each command builds a one-shot budget session from configured defaults,
//! an optional CSV ledger, and any income or weekly-spend overrides, then
//! prints or exports one derived view.

use clap::{Args, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::display::{format_breakdown_bars, format_ledger_table, format_weekly_bars};
use crate::error::{VerziError, VerziResult};
use crate::export::{export_json, export_ledger_csv, export_yaml, DashboardExport, ExportFormat};
use crate::models::DAYS_IN_WEEK;
use crate::services::{import_ledger_file, BudgetSession, ColumnMapping};

/// Inputs shared by every budget command
#[derive(Args, Debug, Clone, Default)]
pub struct BudgetInput {
    /// CSV ledger (date,description,category,amount)
    #[arg(short, long)]
    pub ledger: Option<PathBuf>,

    /// Field delimiter of the ledger file
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// Monthly income (defaults to the configured income)
    #[arg(short, long, allow_hyphen_values = true)]
    pub income: Option<String>,

    /// Spend for Monday through Sunday, comma separated
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub spend: Option<Vec<String>>,
}

/// Where and how to write a view
#[derive(Args, Debug, Clone, Default)]
pub struct OutputOptions {
    /// Export format instead of the terminal view
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show the full dashboard: ledger, totals and both charts
    Summary {
        #[command(flatten)]
        input: BudgetInput,
        #[command(flatten)]
        out: OutputOptions,
    },

    /// Expense breakdown by category
    #[command(alias = "breakdown")]
    Chart {
        #[command(flatten)]
        input: BudgetInput,
        #[command(flatten)]
        out: OutputOptions,
        /// Bar width in characters
        #[arg(long, default_value = "30")]
        width: usize,
    },

    /// Ledger entries only; CSV output can be fed back in with --ledger
    Ledger {
        #[command(flatten)]
        input: BudgetInput,
        #[command(flatten)]
        out: OutputOptions,
    },

    /// Daily income vs spend for the week
    Weekly {
        #[command(flatten)]
        input: BudgetInput,
        #[command(flatten)]
        out: OutputOptions,
        /// Bar width in characters
        #[arg(long, default_value = "30")]
        width: usize,
    },
}

/// Handle budget commands
pub fn handle_budget_command(settings: &Settings, cmd: BudgetCommands) -> VerziResult<()> {
    match cmd {
        BudgetCommands::Summary { input, out } => {
            let session = build_session(settings, &input)?;
            handle_summary(settings, &session, &out)
        }
        BudgetCommands::Chart { input, out, width } => {
            let session = build_session(settings, &input)?;
            handle_chart(settings, &session, &out, width)
        }
        BudgetCommands::Ledger { input, out } => {
            let session = build_session(settings, &input)?;
            handle_ledger(settings, &session, &out)
        }
        BudgetCommands::Weekly { input, out, width } => {
            let session = build_session(settings, &input)?;
            handle_weekly(settings, &session, &out, width)
        }
    }
}

/// Build a session from settings plus command-line overrides
pub fn build_session(settings: &Settings, input: &BudgetInput) -> VerziResult<BudgetSession> {
    let mut session = BudgetSession::from_defaults(&settings.budget);

    if let Some(path) = &input.ledger {
        if !input.delimiter.is_ascii() {
            return Err(VerziError::Validation(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                input.delimiter
            )));
        }
        let mapping = ColumnMapping {
            delimiter: input.delimiter as u8,
            ..ColumnMapping::default()
        };
        session = session.with_ledger(import_ledger_file(path, &mapping)?);
    }

    if let Some(income) = &input.income {
        session.set_income_input(income)?;
    }

    if let Some(spend) = &input.spend {
        if spend.len() != DAYS_IN_WEEK {
            return Err(VerziError::Validation(format!(
                "Expected {} daily spend values (Mon-Sun), got {}",
                DAYS_IN_WEEK,
                spend.len()
            )));
        }
        for (i, raw) in spend.iter().enumerate() {
            session.set_daily_spend_input(i, raw)?;
        }
    }

    Ok(session)
}

fn open_output(output: Option<&Path>) -> VerziResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                VerziError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn write_text(output: Option<&Path>, text: &str) -> VerziResult<()> {
    let mut writer = open_output(output)?;
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| VerziError::Export(e.to_string()))
}

fn finish(out: &OutputOptions, what: &str) {
    if let Some(path) = &out.output {
        println!("{} exported to: {}", what, path.display());
    }
}

fn handle_summary(settings: &Settings, session: &BudgetSession, out: &OutputOptions) -> VerziResult<()> {
    let dashboard = session.dashboard();
    let symbol = &settings.currency_symbol;

    match out.format {
        None => {
            let mut text = format_ledger_table(session.ledger(), symbol);
            text.push('\n');
            text.push_str(&dashboard.format_terminal(symbol));
            write_text(out.output.as_deref(), &text)?;
        }
        Some(ExportFormat::Csv) => {
            let mut writer = open_output(out.output.as_deref())?;
            dashboard.export_csv(&mut writer)?;
        }
        Some(ExportFormat::Json) => {
            let mut writer = open_output(out.output.as_deref())?;
            export_json(&DashboardExport::new(&dashboard), &mut writer, out.pretty)?;
            writer.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        }
        Some(ExportFormat::Yaml) => {
            let mut writer = open_output(out.output.as_deref())?;
            export_yaml(&DashboardExport::new(&dashboard), &mut writer, "Budget Dashboard")?;
            writer.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        }
    }

    finish(out, "Dashboard");
    Ok(())
}

fn handle_ledger(settings: &Settings, session: &BudgetSession, out: &OutputOptions) -> VerziResult<()> {
    let entries = session.ledger().entries();

    match out.format {
        None => {
            let text = format_ledger_table(session.ledger(), &settings.currency_symbol);
            write_text(out.output.as_deref(), &text)?;
        }
        Some(ExportFormat::Csv) => {
            export_ledger_csv(session.ledger(), open_output(out.output.as_deref())?)?;
        }
        Some(ExportFormat::Json) => {
            let mut writer = open_output(out.output.as_deref())?;
            export_json(entries, &mut writer, out.pretty)?;
            writer.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        }
        Some(ExportFormat::Yaml) => {
            let mut writer = open_output(out.output.as_deref())?;
            export_yaml(entries, &mut writer, "Ledger")?;
            writer.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        }
    }

    finish(out, "Ledger");
    Ok(())
}

fn handle_chart(
    settings: &Settings,
    session: &BudgetSession,
    out: &OutputOptions,
    width: usize,
) -> VerziResult<()> {
    let breakdown = session.breakdown();
    let symbol = &settings.currency_symbol;

    match out.format {
        None => {
            let mut text = breakdown.format_terminal(symbol);
            if !breakdown.is_empty() {
                text.push('\n');
                text.push_str(&format_breakdown_bars(&breakdown, symbol, width));
            }
            write_text(out.output.as_deref(), &text)?;
        }
        Some(ExportFormat::Csv) => {
            breakdown.export_csv(open_output(out.output.as_deref())?)?;
        }
        Some(ExportFormat::Json) => {
            let mut writer = open_output(out.output.as_deref())?;
            export_json(&breakdown.to_chart(), &mut writer, out.pretty)?;
            writer.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        }
        Some(ExportFormat::Yaml) => {
            let mut writer = open_output(out.output.as_deref())?;
            export_yaml(&breakdown.to_chart(), &mut writer, "Expense Breakdown")?;
            writer.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        }
    }

    finish(out, "Expense breakdown");
    Ok(())
}

fn handle_weekly(
    settings: &Settings,
    session: &BudgetSession,
    out: &OutputOptions,
    width: usize,
) -> VerziResult<()> {
    let weekly = session.weekly();
    let symbol = &settings.currency_symbol;

    match out.format {
        None => {
            let mut text = weekly.format_terminal(symbol);
            text.push('\n');
            text.push_str(&format_weekly_bars(&weekly, width));

            let overspent = weekly.overspent_days();
            if !overspent.is_empty() {
                let days: Vec<_> = overspent.iter().map(|d| d.label).collect();
                text.push_str(&format!("\nOverspent on: {}\n", days.join(", ")));
            }
            write_text(out.output.as_deref(), &text)?;
        }
        Some(ExportFormat::Csv) => {
            weekly.export_csv(open_output(out.output.as_deref())?)?;
        }
        Some(ExportFormat::Json) => {
            let mut writer = open_output(out.output.as_deref())?;
            export_json(&weekly.to_chart(), &mut writer, out.pretty)?;
            writer.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        }
        Some(ExportFormat::Yaml) => {
            let mut writer = open_output(out.output.as_deref())?;
            export_yaml(&weekly.to_chart(), &mut writer, "Income vs Expenses")?;
            writer.flush().map_err(|e| VerziError::Export(e.to_string()))?;
        }
    }

    finish(out, "Weekly comparison");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_session_defaults() {
        let session = build_session(&Settings::default(), &BudgetInput::default()).unwrap();
        assert_eq!(session.monthly_income(), Amount::new(20000.0));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_build_session_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "date,description,category,amount").unwrap();
        writeln!(file, "2025-01-02,Lunch,food,12").unwrap();

        let input = BudgetInput {
            ledger: Some(file.path().to_path_buf()),
            delimiter: ',',
            income: Some("3000".into()),
            spend: Some(vec!["1", "2", "3", "4", "5", "6", "7"].into_iter().map(String::from).collect()),
        };
        let session = build_session(&Settings::default(), &input).unwrap();

        assert_eq!(session.monthly_income(), Amount::new(3000.0));
        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.weekly_spend()[6], Amount::new(7.0));
    }

    #[test]
    fn test_wrong_spend_count_rejected() {
        let input = BudgetInput {
            spend: Some(vec!["1".into(), "2".into()]),
            ..BudgetInput::default()
        };
        let err = build_session(&Settings::default(), &input).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_bad_income_rejected() {
        let input = BudgetInput {
            income: Some("plenty".into()),
            ..BudgetInput::default()
        };
        assert!(build_session(&Settings::default(), &input).unwrap_err().is_validation());
    }
}
