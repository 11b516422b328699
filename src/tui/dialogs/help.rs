//! Help dialog
//!
//! Shows the global keys and the keys of the current view

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("Ctrl+c", "Quit, even while editing"),
        key_line("?", "Show help"),
        key_line("Tab", "Next view"),
        key_line("Shift+Tab", "Previous view"),
        Line::from(""),
        heading("While Editing"),
        Line::from(""),
        key_line("Enter", "Save the value"),
        key_line("Esc", "Discard changes"),
        Line::from(""),
    ];

    match view {
        ActiveView::Budget => {
            lines.push(heading("Budget"));
            lines.push(Line::from(""));
            lines.push(key_line("i", "Edit monthly income"));
            lines.push(key_line("a/n", "Add expense row"));
            lines.push(key_line("e", "Focus expenses"));
            lines.push(key_line("w", "Focus weekly spend"));
            lines.push(key_line("j/k", "Move between rows"));
            lines.push(key_line("h/l", "Move between columns or days"));
            lines.push(key_line("Enter", "Edit the selected cell or day"));
        }
        ActiveView::Chat => {
            lines.push(heading("Chat"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter/i", "Compose a message"));
            lines.push(key_line("k/j", "Scroll up/down"));
            lines.push(key_line("G/End", "Jump to latest"));
        }
        ActiveView::Feedback => {
            lines.push(heading("Feedback"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Next/previous question"));
            lines.push(key_line("h/l", "Lower/raise the score"));
            lines.push(key_line("0-5", "Set star rating"));
            lines.push(key_line("Enter", "Edit purpose or comments"));
            lines.push(key_line("s", "Submit the survey"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect()
    }

    #[test]
    fn test_help_is_per_view() {
        let budget = text(&help_lines(ActiveView::Budget));
        assert!(budget.contains("Global Keys"));
        assert!(budget.contains("Edit monthly income"));
        assert!(!budget.contains("Submit the survey"));

        let feedback = text(&help_lines(ActiveView::Feedback));
        assert!(feedback.contains("Submit the survey"));
    }
}
