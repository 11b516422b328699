//! Feedback view
//!
//! The survey form: five star-rated aspects, the overall experience score,
//! and the two free-text answers. After a successful submission the form
//! is replaced by a thank-you screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::models::feedback::{MAX_EXPERIENCE, MAX_STARS};
use crate::models::StarRating;
use crate::tui::app::{App, EditTarget, FeedbackField, InputMode};
use crate::tui::layout::centered_rect;

/// Render the feedback view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.feedback.is_submitted() {
        render_thanks(frame, area);
    } else {
        render_form(frame, app, area);
    }
}

fn stars(rating: StarRating) -> String {
    (1..=MAX_STARS)
        .map(|star| if rating.lights(star) { '★' } else { '☆' })
        .collect()
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.feedback_pending {
        " Feedback (submitting...) "
    } else {
        " Feedback "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); FeedbackField::ALL.len()];
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let selected = app.current_feedback_field();
    for (i, field) in FeedbackField::ALL.iter().enumerate() {
        render_field(frame, app, *field, *field == selected, rows[i]);
    }

    let hints = Line::from(Span::styled(
        "[j/k] Move  [h/l] or [0-5] Rate  [Enter] Edit text  [s] Submit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hints), rows[FeedbackField::ALL.len() + 1]);
}

fn render_field(frame: &mut Frame, app: &App, field: FeedbackField, selected: bool, area: Rect) {
    let label_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if selected { "▶ " } else { "  " };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(10)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(field.label(), label_style),
        ])),
        columns[0],
    );

    let form = &app.feedback.form;
    match field {
        FeedbackField::Aspect(aspect) => {
            let rating = form.rating(aspect);
            let line = Line::from(Span::styled(stars(rating), Style::default().fg(Color::Yellow)));
            frame.render_widget(Paragraph::new(line), columns[1]);
        }
        FeedbackField::Overall => {
            let score = form.overall_experience.score();
            let label = if score == 0 {
                "-".to_string()
            } else {
                format!("{}/{}", score, MAX_EXPERIENCE)
            };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
                .ratio(f64::from(score) / f64::from(MAX_EXPERIENCE))
                .label(label);
            let width = columns[1].width.min(40);
            frame.render_widget(gauge, Rect { width, ..columns[1] });
        }
        FeedbackField::Purpose | FeedbackField::Comments => {
            if app.input_mode == InputMode::Editing(EditTarget::Feedback(field)) {
                frame.render_widget(&app.input, columns[1]);
                return;
            }
            let text = if field == FeedbackField::Purpose {
                &form.purpose
            } else {
                &form.comments
            };
            let line = if text.is_empty() {
                Span::styled("(empty)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(text.as_str())
            };
            frame.render_widget(Paragraph::new(Line::from(line)), columns[1]);
        }
    }
}

fn render_thanks(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            "Thank you for your feedback!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to go back",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(text).block(block).alignment(Alignment::Center),
        popup,
    );
}
