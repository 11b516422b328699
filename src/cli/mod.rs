//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod chat;
pub mod feedback;

pub use budget::{handle_budget_command, BudgetCommands};
pub use chat::{handle_chat_command, ChatCommands};
pub use feedback::{handle_feedback_command, FeedbackCommands};
