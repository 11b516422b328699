//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use tracing::info;

use crate::client::{ChatClient, FeedbackClient};
use crate::config::Settings;

use super::app::App;
use super::dispatch::Dispatcher;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings) -> Result<()> {
    // Build clients first so a bad endpoint fails before the screen switches
    let chat = Arc::new(ChatClient::from_settings(&settings.chat)?);
    let feedback = Arc::new(FeedbackClient::from_settings(&settings.feedback)?);

    let events = EventHandler::default();
    let dispatcher = Dispatcher::new(chat, feedback, events.sender())?;

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings);
    info!("tui started");

    let result = event_loop(&mut terminal, &mut app, &events, &dispatcher);

    restore_terminal()?;
    info!("tui stopped");
    result
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    events: &EventHandler,
    dispatcher: &Dispatcher,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        handle_event(app, events.next()?)?;

        for request in app.take_requests() {
            dispatcher.dispatch(request);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
