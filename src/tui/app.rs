//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Network calls never run here: sends are queued as [`Request`]s for the
//! event loop to spawn, and their outcomes come back through
//! [`App::finish_chat_turn`] and [`App::finish_feedback`].

use crate::config::Settings;
use crate::error::VerziResult;
use crate::models::{ChatMessage, ChatSession, EntryField, FeedbackSurvey, ServiceAspect, DAYS_IN_WEEK};
use crate::services::{chat as chat_service, feedback as feedback_service, BudgetSession};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Budget,
    Chat,
    Feedback,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [ActiveView::Budget, ActiveView::Chat, ActiveView::Feedback];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::Chat => "Chat",
            Self::Feedback => "Feedback",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Budget => Self::Chat,
            Self::Chat => Self::Feedback,
            Self::Feedback => Self::Budget,
        }
    }
}

/// Section of the budget view that has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetFocus {
    #[default]
    Entries,
    Weekly,
}

/// Row of the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackField {
    Aspect(ServiceAspect),
    Overall,
    Purpose,
    Comments,
}

impl FeedbackField {
    pub const ALL: [FeedbackField; 8] = [
        FeedbackField::Aspect(ServiceAspect::CustomerService),
        FeedbackField::Aspect(ServiceAspect::BusinessService),
        FeedbackField::Aspect(ServiceAspect::Authenticity),
        FeedbackField::Aspect(ServiceAspect::Significance),
        FeedbackField::Aspect(ServiceAspect::UpToDate),
        FeedbackField::Overall,
        FeedbackField::Purpose,
        FeedbackField::Comments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Aspect(aspect) => aspect.label(),
            Self::Overall => "Overall Experience",
            Self::Purpose => "Purpose",
            Self::Comments => "Comments",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Purpose | Self::Comments)
    }
}

/// What the text input is currently editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Income,
    Entry(usize, EntryField),
    Day(usize),
    Feedback(FeedbackField),
    ChatMessage,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing(EditTarget),
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Outbound work for the event loop
#[derive(Debug, Clone)]
pub enum Request {
    /// Complete the conversation so far
    Chat(Vec<ChatMessage>),
    /// Post a snapshot of the survey
    Feedback(FeedbackSurvey),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_view: ActiveView,
    pub active_dialog: ActiveDialog,
    pub input_mode: InputMode,

    /// Shared line editor for whichever field is being edited
    pub input: TextInput,

    // Budget tracker
    pub budget: BudgetSession,
    pub budget_focus: BudgetFocus,
    pub selected_entry: usize,
    pub selected_field: EntryField,
    pub selected_day: usize,

    // Chat
    pub chat: ChatSession,
    /// Lines scrolled up from the bottom of the transcript
    pub chat_scroll: usize,

    // Feedback
    pub feedback: FeedbackSurvey,
    pub feedback_field: usize,
    pub feedback_pending: bool,

    pub notifications: NotificationQueue,

    requests: Vec<Request>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            input_mode: InputMode::default(),
            input: TextInput::new(),
            budget: BudgetSession::from_defaults(&settings.budget),
            budget_focus: BudgetFocus::default(),
            selected_entry: 0,
            selected_field: EntryField::Date,
            selected_day: 0,
            chat: ChatSession::new(settings.chat.greeting.clone()),
            chat_scroll: 0,
            feedback: FeedbackSurvey::new(),
            feedback_field: 0,
            feedback_pending: false,
            notifications: NotificationQueue::new(),
            requests: Vec::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        if view == ActiveView::Chat {
            self.chat_scroll = 0;
        }
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Drain queued requests
    pub fn take_requests(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.requests)
    }

    // === Editing ===

    /// Start editing `target`, seeding the input with its current text
    pub fn begin_edit(&mut self, target: EditTarget) {
        let current = match target {
            EditTarget::Income => self.budget.monthly_income().to_input_text(),
            EditTarget::Entry(index, field) => self
                .budget
                .ledger()
                .get(index)
                .map(|e| e.field_text(field))
                .unwrap_or_default(),
            EditTarget::Day(index) => self.budget.weekly_spend()[index].to_input_text(),
            EditTarget::Feedback(FeedbackField::Purpose) => self.feedback.form.purpose.clone(),
            EditTarget::Feedback(FeedbackField::Comments) => self.feedback.form.comments.clone(),
            EditTarget::Feedback(_) => return,
            EditTarget::ChatMessage => String::new(),
        };
        self.input = TextInput::new().content(current).focused(true);
        self.input_mode = InputMode::Editing(target);
    }

    pub fn cancel_edit(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Apply the input to the field being edited
    ///
    /// On a validation error the editor stays open so the value can be fixed.
    pub fn commit_edit(&mut self) {
        let InputMode::Editing(target) = self.input_mode else {
            return;
        };
        let value = self.input.value().to_string();

        let result = match target {
            EditTarget::Income => self.budget.set_income_input(&value).map(|_| ()),
            EditTarget::Entry(index, field) => {
                self.budget.update_entry(index, field, &value).map(|_| ())
            }
            EditTarget::Day(index) => self.budget.set_daily_spend_input(index, &value).map(|_| ()),
            EditTarget::Feedback(FeedbackField::Purpose) => {
                self.feedback.form.purpose = value;
                Ok(())
            }
            EditTarget::Feedback(FeedbackField::Comments) => {
                self.feedback.form.comments = value;
                Ok(())
            }
            EditTarget::Feedback(_) => Ok(()),
            EditTarget::ChatMessage => self.send_chat(&value),
        };

        match result {
            Ok(()) => self.cancel_edit(),
            Err(err) => self.notify(Notification::error(err.to_string())),
        }
    }

    // === Budget ===

    /// Append a blank entry and select it
    pub fn add_entry(&mut self) {
        self.selected_entry = self.budget.add_entry();
        self.selected_field = EntryField::Date;
        self.budget_focus = BudgetFocus::Entries;
    }

    pub fn select_entry(&mut self, delta: isize) {
        let len = self.budget.ledger().len();
        if len == 0 {
            self.selected_entry = 0;
            return;
        }
        let next = self.selected_entry as isize + delta;
        self.selected_entry = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn select_day(&mut self, delta: isize) {
        let next = self.selected_day as isize + delta;
        self.selected_day = next.rem_euclid(DAYS_IN_WEEK as isize) as usize;
    }

    // === Chat ===

    /// Start a chat turn; the completion is queued for the event loop
    ///
    /// Fails while a reply is still pending, leaving the transcript as is.
    pub fn send_chat(&mut self, text: &str) -> VerziResult<()> {
        if let Some(messages) = chat_service::begin_turn(&mut self.chat, text)? {
            self.chat_scroll = 0;
            self.requests.push(Request::Chat(messages));
        }
        Ok(())
    }

    /// Record the outcome of a queued chat request
    pub fn finish_chat_turn(&mut self, result: VerziResult<ChatMessage>) {
        if let Err(err) = chat_service::finish_turn(&mut self.chat, result) {
            self.notify(Notification::error(format!("Error fetching response: {}", err)));
        }
        self.chat_scroll = 0;
    }

    // === Feedback ===

    pub fn current_feedback_field(&self) -> FeedbackField {
        FeedbackField::ALL[self.feedback_field.min(FeedbackField::ALL.len() - 1)]
    }

    pub fn select_feedback_field(&mut self, delta: isize) {
        let last = FeedbackField::ALL.len() as isize - 1;
        self.feedback_field = (self.feedback_field as isize + delta).clamp(0, last) as usize;
    }

    /// Set the star rating of the selected aspect
    pub fn rate_selected(&mut self, stars: u8) {
        if let FeedbackField::Aspect(aspect) = self.current_feedback_field() {
            if let Err(err) = feedback_service::rate(&mut self.feedback, aspect, stars) {
                self.notify(Notification::warning(err.to_string()));
            }
        }
    }

    /// Step the selected score up or down
    pub fn adjust_selected(&mut self, delta: i8) {
        match self.current_feedback_field() {
            FeedbackField::Aspect(aspect) => {
                let stars = self.feedback.form.rating(aspect).stars() as i16 + delta as i16;
                self.rate_selected(stars.clamp(0, crate::models::feedback::MAX_STARS as i16) as u8);
            }
            FeedbackField::Overall => {
                let form = &mut self.feedback.form;
                form.overall_experience = form.overall_experience.nudge(delta);
            }
            _ => {}
        }
    }

    /// Queue the survey for submission
    pub fn submit_feedback(&mut self) {
        if self.feedback_pending {
            self.notify(Notification::warning("Submission already in progress"));
            return;
        }
        self.feedback_pending = true;
        self.requests.push(Request::Feedback(self.feedback.clone()));
    }

    /// Record the outcome of a queued feedback request
    pub fn finish_feedback(&mut self, result: VerziResult<()>) {
        self.feedback_pending = false;
        match feedback_service::finish_submission(&mut self.feedback, result) {
            Ok(()) => self.notify(Notification::success("Feedback submitted")),
            Err(err) => self.notify(Notification::error(format!("Submission failed: {}", err))),
        }
    }

    /// Leave the thank-you screen
    pub fn back_to_form(&mut self) {
        self.feedback.reset_submitted();
    }
}
