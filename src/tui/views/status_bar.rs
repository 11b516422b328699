//! Status bar view
//!
//! Shows the active view, income and expenses, pending requests, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let symbol = &app.settings.currency_symbol;
    let income = app.budget.monthly_income();
    let spent = app.budget.ledger().total();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.active_view.title()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled("Income: ", Style::default().fg(Color::White)),
        Span::styled(income.format_with_symbol(symbol), Style::default().fg(Color::Green)),
        Span::raw(" │ "),
        Span::styled("Spent: ", Style::default().fg(Color::White)),
        Span::styled(
            spent.format_with_symbol(symbol),
            Style::default().fg(if spent.value() > income.value() {
                Color::Red
            } else {
                Color::Yellow
            }),
        ),
    ];

    if app.chat.is_pending() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("chat…", Style::default().fg(Color::Magenta)));
    }
    if app.feedback_pending {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("sending feedback…", Style::default().fg(Color::Magenta)));
    }

    // Key hints (right-aligned)
    let hints = match app.input_mode {
        InputMode::Editing(_) => " Enter:Save  Esc:Cancel ",
        InputMode::Normal => " q:Quit  ?:Help  Tab:Switch view ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
