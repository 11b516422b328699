//! VerziBiz - terminal budget tracker, chat client and feedback survey
//!
//! This library provides the core functionality behind the `verzi` binary:
//! a monthly budget tracker with category totals and weekly income vs spend
//! comparison, a chat client for an OpenAI-compatible completions endpoint,
//! and a service feedback survey.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (ledger entries, chat messages, survey answers)
//! - `services`: Business logic layer
//! - `reports`: Derived budget views (totals, breakdown, weekly comparison)
//! - `client`: HTTP clients for the chat and feedback endpoints
//! - `display`, `export`: Terminal formatting and file export
//! - `cli`, `tui`: The two front-ends
//!
//! # Example
//!
//! ```rust,ignore
//! use verzi::config::{VerziPaths, Settings};
//! use verzi::services::BudgetSession;
//!
//! let paths = VerziPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let session = BudgetSession::from_defaults(&settings.budget);
//! println!("{}", session.dashboard().format_terminal(&settings.currency_symbol));
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::{VerziError, VerziResult};
