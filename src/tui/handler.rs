//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state, and applies replies from background requests.

use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, BudgetFocus, EditTarget, FeedbackField, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.notifications.remove_expired(),
        Event::Resize(_, _) => {}
        Event::ChatReply(result) => app.finish_chat_turn(result),
        Event::FeedbackResult(result) => app.finish_feedback(result),
        Event::InputClosed(reason) => bail!("terminal input stopped: {}", reason),
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Any key closes a dialog
    if app.has_dialog() {
        app.close_dialog();
        return;
    }

    match app.input_mode {
        InputMode::Editing(_) => handle_editing_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

/// Handle keys while the text input is open
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) => app.input.insert(c),
        _ => {}
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        KeyCode::Tab => {
            app.switch_view(app.active_view.next());
            return;
        }
        KeyCode::BackTab => {
            app.switch_view(app.active_view.next().next());
            return;
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::Budget => handle_budget_key(app, key),
        ActiveView::Chat => handle_chat_key(app, key),
        ActiveView::Feedback => handle_feedback_key(app, key),
    }
}

/// Handle keys in the budget view
fn handle_budget_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') => app.begin_edit(EditTarget::Income),
        KeyCode::Char('a') | KeyCode::Char('n') => app.add_entry(),
        KeyCode::Char('e') => app.budget_focus = BudgetFocus::Entries,
        KeyCode::Char('w') => app.budget_focus = BudgetFocus::Weekly,

        KeyCode::Char('j') | KeyCode::Down => {
            if app.budget_focus == BudgetFocus::Entries {
                app.select_entry(1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.budget_focus == BudgetFocus::Entries {
                app.select_entry(-1);
            }
        }
        KeyCode::Char('h') | KeyCode::Left => match app.budget_focus {
            BudgetFocus::Entries => app.selected_field = app.selected_field.prev(),
            BudgetFocus::Weekly => app.select_day(-1),
        },
        KeyCode::Char('l') | KeyCode::Right => match app.budget_focus {
            BudgetFocus::Entries => app.selected_field = app.selected_field.next(),
            BudgetFocus::Weekly => app.select_day(1),
        },

        KeyCode::Enter => match app.budget_focus {
            BudgetFocus::Entries => {
                if app.selected_entry < app.budget.ledger().len() {
                    app.begin_edit(EditTarget::Entry(app.selected_entry, app.selected_field));
                }
            }
            BudgetFocus::Weekly => app.begin_edit(EditTarget::Day(app.selected_day)),
        },
        _ => {}
    }
}

/// Handle keys in the chat view
fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('i') => app.begin_edit(EditTarget::ChatMessage),
        KeyCode::Char('k') | KeyCode::Up => app.chat_scroll += 1,
        KeyCode::Char('j') | KeyCode::Down => app.chat_scroll = app.chat_scroll.saturating_sub(1),
        KeyCode::Char('G') | KeyCode::End => app.chat_scroll = 0,
        _ => {}
    }
}

/// Handle keys in the feedback view
fn handle_feedback_key(app: &mut App, key: KeyEvent) {
    if app.feedback.is_submitted() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b')) {
            app.back_to_form();
        }
        return;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_feedback_field(1),
        KeyCode::Char('k') | KeyCode::Up => app.select_feedback_field(-1),
        KeyCode::Char('h') | KeyCode::Left => app.adjust_selected(-1),
        KeyCode::Char('l') | KeyCode::Right => app.adjust_selected(1),
        KeyCode::Char(c @ '0'..='5') => {
            if let Some(stars) = c.to_digit(10) {
                app.rate_selected(stars as u8);
            }
        }
        KeyCode::Enter => {
            let field = app.current_feedback_field();
            if field.is_text() {
                app.begin_edit(EditTarget::Feedback(field));
            }
        }
        KeyCode::Char('s') => app.submit_feedback(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Amount, EntryField};
    use crate::tui::app::Request;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_and_fill_entry() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "2025-03-01");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.selected_field, EntryField::Category);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "food");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "42");
        press(&mut app, KeyCode::Enter);

        let entry = app.budget.ledger().get(0).unwrap();
        assert_eq!(entry.date, "2025-03-01");
        assert_eq!(entry.category, "food");
        assert_eq!(entry.amount, Amount::new(42.0));
        assert_eq!(app.budget.category_totals().get("food"), Some(Amount::new(42.0)));
    }

    #[test]
    fn test_quit_keys_are_text_while_editing() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view, ActiveView::Chat);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "quiet");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.chat.len(), 2);
        assert!(matches!(app.take_requests().as_slice(), [Request::Chat(_)]));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_escape_discards_edit() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "5");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.budget.monthly_income(), Amount::new(20000.0));
    }

    #[test]
    fn test_weekly_edit_via_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('w'));
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "100");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.budget.weekly_spend()[6], Amount::new(100.0));
        assert_eq!(app.budget.weekly_spend()[0], Amount::new(3000.0));
    }

    #[test]
    fn test_feedback_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.switch_view(ActiveView::Feedback);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.feedback.form.customer_service.stars(), 3);
        assert_eq!(app.feedback.form.business_service.stars(), 5);

        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.current_feedback_field(), FeedbackField::Purpose);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Research");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.feedback.form.purpose, "Research");

        press(&mut app, KeyCode::Char('s'));
        assert!(app.feedback_pending);
        handle_event(&mut app, Event::FeedbackResult(Ok(()))).unwrap();
        assert!(app.feedback.is_submitted());

        press(&mut app, KeyCode::Char('b'));
        assert!(!app.feedback.is_submitted());
        assert_eq!(app.feedback.form.purpose, "Research");
    }

    #[test]
    fn test_help_dialog_closes_on_any_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.has_dialog());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_closed_input_ends_loop() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        let err = handle_event(&mut app, Event::InputClosed("device gone".into())).unwrap_err();
        assert!(err.to_string().contains("device gone"));
        assert!(handle_event(&mut app, Event::Tick).is_ok());
    }
}
