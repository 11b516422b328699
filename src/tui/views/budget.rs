//! Budget view
//!
//! Monthly income, the expense ledger, the category breakdown, and the
//! weekly income vs spend chart. Everything below the inputs is derived
//! from the session on each frame.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::hex_color;
use crate::display::{format_bar, format_percentage};
use crate::models::period::{chart_label, form_label};
use crate::models::{EntryField, WEEKDAYS};
use crate::reports::weekly::{INCOME_COLOR, SPENT_COLOR};
use crate::tui::app::{App, BudgetFocus, EditTarget, InputMode};
use crate::tui::layout::BudgetLayout;

/// Render the budget view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = BudgetLayout::new(area);

    render_income(frame, app, layout.income);
    render_entries(frame, app, layout.entries);
    render_breakdown(frame, app, layout.breakdown);
    render_weekly(frame, app, layout.weekly);
}

fn border_style(focused: bool) -> Style {
    Style::default().fg(if focused { Color::Cyan } else { Color::Gray })
}

fn render_income(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing(EditTarget::Income);
    let block = Block::default()
        .title(" Monthly Income ")
        .borders(Borders::ALL)
        .border_style(border_style(editing));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if editing {
        frame.render_widget(&app.input, inner);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let income = app.budget.monthly_income();
    let spent = app.budget.ledger().total();
    let left = income - spent;

    let line = Line::from(vec![
        Span::styled(
            income.format_with_symbol(symbol),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  Expenses: "),
        Span::styled(spent.format_with_symbol(symbol), Style::default().fg(Color::Red)),
        Span::raw("  │  Left: "),
        Span::styled(
            left.format_with_symbol(symbol),
            Style::default().fg(if left.is_negative() { Color::Red } else { Color::Yellow }),
        ),
        Span::styled("   [i] Edit income", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_entries(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.budget_focus == BudgetFocus::Entries;
    let block = Block::default()
        .title(" Expenses ")
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let ledger = app.budget.ledger();
    if ledger.is_empty() {
        let text = Paragraph::new("No expenses yet. Press [a] to add one.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let editing = match app.input_mode {
        InputMode::Editing(EditTarget::Entry(index, field)) => Some((index, field)),
        _ => None,
    };

    let rows: Vec<Row> = ledger
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let cells: Vec<Cell> = EntryField::ALL
                .iter()
                .map(|field| {
                    let text = if editing == Some((i, *field)) {
                        format!("{}▏", app.input.value())
                    } else if *field == EntryField::Amount {
                        entry.amount.format_with_symbol(&app.settings.currency_symbol)
                    } else {
                        entry.field_text(*field)
                    };

                    let mut style = Style::default();
                    if editing == Some((i, *field)) {
                        style = style.fg(Color::Black).bg(Color::Cyan);
                    } else if focused && i == app.selected_entry && *field == app.selected_field {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Cell::from(text).style(style)
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    let header = Row::new(
        EntryField::ALL
            .iter()
            .map(|f| Cell::from(f.label()).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::Yellow));

    let widths = [
        Constraint::Length(12),
        Constraint::Min(14),
        Constraint::Length(14),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if focused {
        state.select(Some(app.selected_entry));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Expense Breakdown ")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let breakdown = app.budget.breakdown();
    if breakdown.is_empty() {
        frame.render_widget(
            Paragraph::new("No expenses recorded.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    let bar_width = (area.width as usize).saturating_sub(34).clamp(4, 30);
    let symbol = &app.settings.currency_symbol;
    let lines: Vec<Line> = breakdown
        .slices
        .iter()
        .map(|slice| {
            let color = hex_color(slice.color);
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::raw(format!("{:<12.12} ", slice.label())),
                Span::styled(
                    format_bar(slice.percentage, 100.0, bar_width),
                    Style::default().fg(color),
                ),
                Span::raw(format!(" {:>5} ", format_percentage(slice.percentage))),
                Span::styled(
                    slice.total.format_with_symbol(symbol),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Short bar caption, e.g. `3.5k`
fn compact(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        format!("{:.0}", value)
    }
}

fn bar_height(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

fn render_weekly(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.budget_focus == BudgetFocus::Weekly;
    let block = Block::default()
        .title(" Income vs Expenses ")
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let weekly = app.budget.weekly();
    let income_style = Style::default().fg(hex_color(INCOME_COLOR));
    let spent_style = Style::default().fg(hex_color(SPENT_COLOR));

    let mut chart = BarChart::default()
        .bar_width(5)
        .bar_gap(1)
        .group_gap(3);

    for (i, day) in weekly.days.iter().enumerate() {
        let label_style = if focused && i == app.selected_day {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        let bars = [
            Bar::default()
                .value(bar_height(day.income.value()))
                .text_value(compact(day.income.value()))
                .style(income_style),
            Bar::default()
                .value(bar_height(day.spent.value()))
                .text_value(compact(day.spent.value()))
                .style(spent_style),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(Span::styled(day.label, label_style)))
                .bars(&bars),
        );
    }
    frame.render_widget(chart, chunks[0]);

    // Legend, or the editor for the selected day
    let footer = match app.input_mode {
        InputMode::Editing(EditTarget::Day(index)) => Line::from(vec![
            Span::styled(
                format!("{} spend: ", form_label(WEEKDAYS[index])),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!("{}▏", app.input.value())),
        ]),
        _ => {
            let mut spans = vec![
                Span::styled("■ Income ", income_style),
                Span::styled("■ Spent ", spent_style),
            ];
            if focused {
                let day = WEEKDAYS[app.selected_day];
                spans.push(Span::raw(format!(
                    "  │  {} selected: [h/l] move  [Enter] edit",
                    chart_label(day)
                )));
            } else {
                spans.push(Span::styled("  [w] Edit weekly spend", Style::default().fg(Color::DarkGray)));
            }
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}
