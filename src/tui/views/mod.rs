//! TUI Views module
//!
//! Contains the three main views (budget, chat, feedback), the tab bar
//! and the status bar.

pub mod budget;
pub mod chat;
pub mod feedback;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Tabs,
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{notification_area, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_view {
        ActiveView::Budget => budget::render(frame, app, layout.main),
        ActiveView::Chat => chat::render(frame, app, layout.main),
        ActiveView::Feedback => feedback::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(frame.area()),
        );
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ActiveView::ALL
        .iter()
        .map(|view| Line::from(Span::raw(view.title())))
        .collect();
    let selected = ActiveView::ALL
        .iter()
        .position(|view| *view == app.active_view)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}

/// Palette hex color as a terminal color
pub(crate) fn hex_color(hex: &str) -> Color {
    hex.parse().unwrap_or(Color::Gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::ChatMessage;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#FF6384"), Color::Rgb(0xFF, 0x63, 0x84));
        assert_eq!(hex_color("nope"), Color::Gray);
    }

    #[test]
    fn test_budget_screen() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.add_entry();
        app.budget.update_entry(0, crate::models::EntryField::Category, "food").unwrap();
        app.budget.update_entry(0, crate::models::EntryField::Amount, "25").unwrap();

        let text = screen_text(&mut app);
        assert!(text.contains("Monthly Income"));
        assert!(text.contains("$20000.00"));
        assert!(text.contains("food"));
        assert!(text.contains("Income vs Expenses"));
    }

    #[test]
    fn test_chat_screen() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.switch_view(ActiveView::Chat);
        app.send_chat("Where are you based?").unwrap();

        let text = screen_text(&mut app);
        assert!(text.contains("Hello! How can I assist you today?"));
        assert!(text.contains("Where are you based?"));
        assert!(text.contains("Thinking"));

        app.finish_chat_turn(Ok(ChatMessage::assistant("Nairobi.")));
        let text = screen_text(&mut app);
        assert!(text.contains("Nairobi."));
        assert!(!text.contains("Thinking"));
    }

    #[test]
    fn test_feedback_screens() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.switch_view(ActiveView::Feedback);

        let text = screen_text(&mut app);
        assert!(text.contains("Customer Service"));
        assert!(text.contains("☆☆☆☆☆"));

        app.submit_feedback();
        app.finish_feedback(Ok(()));
        let text = screen_text(&mut app);
        assert!(text.contains("Thank you for your feedback!"));
    }

    #[test]
    fn test_help_dialog() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog(ActiveDialog::Help);
        assert!(screen_text(&mut app).contains("Global Keys"));
    }
}
