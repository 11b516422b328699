//! Text input widget
//!
//! A single-line editor with a cursor. The cursor counts characters, not
//! bytes, so multi-byte input edits cleanly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters
    cursor: usize,
    focused: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Replace the content and put the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_len();
        self
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() as u16 + 2
        };
        let input_start = area.x + label_width;
        let input_width = area.width.saturating_sub(label_width) as usize;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(self.label.as_str(), Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        if self.content.is_empty() && !self.focused {
            buf.set_stringn(
                input_start,
                area.y,
                &self.placeholder,
                input_width,
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        // Keep the cursor in view on long input
        let skip = (self.cursor + 1).saturating_sub(input_width);
        let visible: String = self.content.chars().skip(skip).collect();
        let style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };
        buf.set_stringn(input_start, area.y, &visible, input_width, style);

        if self.focused {
            let cursor_x = input_start + (self.cursor - skip) as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
