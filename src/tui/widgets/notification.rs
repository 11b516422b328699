//! Toast notification widget
//!
//! Transient messages shown in the top-right corner and dropped on the
//! next tick after they expire.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use std::time::{Duration, Instant};

/// Most notifications kept at once; older ones are dropped first
const MAX_QUEUED: usize = 5;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// Errors stay up longer
    fn lifetime(&self) -> Duration {
        match self {
            Self::Error => Duration::from_secs(6),
            _ => Duration::from_secs(3),
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    lifetime: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            lifetime: notification_type.lifetime(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.lifetime
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        let color = kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Area for a toast in the top-right corner of `frame`
pub fn notification_area(frame: Rect) -> Rect {
    let width = frame.width.min(48);
    let height = frame.height.min(4);
    Rect::new(frame.x + frame.width - width, frame.y + 1.min(frame.height), width, height)
        .intersection(frame)
}

/// A queue of notifications to display
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification, dropping the oldest beyond the cap
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
        if self.notifications.len() > MAX_QUEUED {
            self.notifications.remove(0);
        }
    }

    pub fn remove_expired(&mut self) {
        let now = Instant::now();
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    /// Newest notification
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Error.color(), Color::Red);
        assert!(NotificationType::Error.lifetime() > NotificationType::Info.lifetime());
    }

    #[test]
    fn test_queue_shows_newest_and_caps() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        for i in 0..7 {
            queue.push(Notification::info(format!("n{}", i)));
        }
        assert_eq!(queue.len(), MAX_QUEUED);
        assert_eq!(queue.current().unwrap().message, "n6");
    }

    #[test]
    fn test_expiry() {
        let n = Notification::warning("slow");
        assert!(!n.is_expired_at(Instant::now()));
        assert!(n.is_expired_at(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn test_notification_area_fits() {
        let area = notification_area(Rect::new(0, 0, 30, 3));
        assert!(area.width <= 30);
        assert!(area.bottom() <= 3);
    }
}
