//! Chat view
//!
//! The transcript, anchored to the bottom, and the message composer.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{ChatMessage, Role};
use crate::tui::app::{App, EditTarget, InputMode};
use crate::tui::layout::ChatLayout;
use crate::tui::widgets::TextInput;

/// Render the chat view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = ChatLayout::new(area);
    render_transcript(frame, app, layout.transcript);
    render_composer(frame, app, layout.composer);
}

fn speaker(role: Role) -> (&'static str, Style) {
    match role {
        Role::User => ("You", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Role::Assistant => ("Bot", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Role::System => ("System", Style::default().fg(Color::DarkGray)),
    }
}

/// Greedy word wrap; words longer than `width` are split
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let extra = if current_len == 0 { word.len() } else { word.len() + 1 };
            if current_len + extra > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }
        lines.push(current);
    }

    lines
}

fn message_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let (name, style) = speaker(message.role);
    let mut lines = vec![Line::from(Span::styled(name, style))];
    lines.extend(
        wrap(&message.content, width.saturating_sub(2))
            .into_iter()
            .map(|text| Line::from(format!("  {}", text))),
    );
    lines.push(Line::default());
    lines
}

fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Chat ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines: Vec<Line> = app
        .chat
        .messages()
        .iter()
        .flat_map(|message| message_lines(message, width))
        .collect();

    if app.chat.is_pending() {
        lines.push(Line::from(Span::styled(
            "Bot is typing... Thinking",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    // chat_scroll counts lines up from the bottom
    let height = inner.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    let from_bottom = app.chat_scroll.min(max_scroll);
    let top = max_scroll - from_bottom;

    let visible: Vec<Line> = lines.into_iter().skip(top).take(height).collect();
    frame.render_widget(Paragraph::new(visible), inner);
}

fn render_composer(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing(EditTarget::ChatMessage);
    let block = Block::default()
        .title(" Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing { Color::Cyan } else { Color::Gray }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if editing {
        frame.render_widget(&app.input, inner);
    } else {
        let hint = if app.chat.is_pending() {
            "Waiting for a reply..."
        } else {
            "Type your message... ([Enter] to compose)"
        };
        let idle = TextInput::new().placeholder(hint);
        frame.render_widget(&idle, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap("the quick brown fox", 9), vec!["the quick", "brown fox"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_long_word_and_newlines() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("one\ntwo", 10), vec!["one", "two"]);
    }
}
