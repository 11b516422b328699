//! Terminal User Interface module
//!
//! This module provides the VerziBiz TUI using ratatui. The three views
//! (budget, chat, feedback) share one `App` state; network requests run on
//! a background runtime and report back through the event channel.

pub mod app;
pub mod dispatch;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
