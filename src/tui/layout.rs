//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: tab bar, main panel, status bar,
//! and the split of the budget view.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// View tabs at the top
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tabs
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the budget view
pub struct BudgetLayout {
    /// Monthly income line
    pub income: Rect,
    /// Ledger table
    pub entries: Rect,
    /// Category totals and breakdown bars
    pub breakdown: Rect,
    /// Weekly income vs spend chart
    pub weekly: Rect,
}

impl BudgetLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Income
                Constraint::Percentage(50), // Ledger + breakdown
                Constraint::Min(8),         // Weekly chart
            ])
            .split(area);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        Self {
            income: rows[0],
            entries: middle[0],
            breakdown: middle[1],
            weekly: rows[2],
        }
    }
}

/// Layout for the chat view
pub struct ChatLayout {
    pub transcript: Rect,
    pub composer: Rect,
}

impl ChatLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        Self {
            transcript: chunks[0],
            composer: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
