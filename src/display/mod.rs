//! Display formatting for terminal output
//!
//! Tables, text bar charts, transcripts and survey summaries for the CLI.

pub mod chat;
pub mod feedback;
pub mod ledger;
pub mod report;

pub use chat::{format_message, format_transcript};
pub use feedback::format_survey;
pub use ledger::format_ledger_table;
pub use report::{format_bar, format_breakdown_bars, format_percentage, format_weekly_bars};
