//! Core data models for VerziBiz
//!
//! This module contains the data structures behind the three front-ends:
//! ledger entries and weekly values for the budget tracker, the chat
//! transcript, and the feedback survey.

pub mod amount;
pub mod chat;
pub mod entry;
pub mod feedback;
pub mod ledger;
pub mod period;

pub use amount::Amount;
pub use chat::{ChatMessage, ChatSession, Role};
pub use entry::{EntryField, LedgerEntry};
pub use feedback::{ExperienceScore, FeedbackForm, FeedbackSurvey, ServiceAspect, StarRating};
pub use ledger::{Ledger, LedgerEditError};
pub use period::{PeriodSeries, DAYS_IN_WEEK, WEEKDAYS};
