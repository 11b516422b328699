//! Service layer for VerziBiz
//!
//! The service layer holds the behavior of the three front-ends on top of
//! the models: the budget session, chat turns, feedback submission, and
//! ledger import.

pub mod budget;
pub mod chat;
pub mod feedback;
pub mod import;

pub use budget::BudgetSession;
pub use chat::{ChatBackend, ChatService};
pub use feedback::{FeedbackService, FeedbackSink};
pub use import::{import_ledger, import_ledger_file, ColumnMapping};
