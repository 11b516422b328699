//! Event handling for the TUI
//!
//! Terminal input is read on a background thread and forwarded over a
//! channel. Replies from network requests are posted to the same channel,
//! so the main loop handles everything in one place.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::VerziResult;
use crate::models::ChatMessage;

/// Events handled by the main loop
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
    /// Outcome of a chat completion request
    ChatReply(VerziResult<ChatMessage>),
    /// Outcome of a feedback submission
    FeedbackResult(VerziResult<()>),
    /// The input thread stopped; no more key events will arrive
    InputClosed(String),
}

/// Event handler for terminal events
pub struct EventHandler {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handler = {
            let sender = sender.clone();
            thread::spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    let timeout = tick_rate
                        .checked_sub(last_tick.elapsed())
                        .unwrap_or(Duration::ZERO);

                    match event::poll(timeout) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                // Windows reports releases too
                                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                    Some(Event::Key(key))
                                }
                                Ok(CrosstermEvent::Resize(width, height)) => {
                                    Some(Event::Resize(width, height))
                                }
                                Ok(_) => None,
                                Err(err) => {
                                    tracing::error!("failed to read terminal event: {err}");
                                    let _ = sender.send(Event::InputClosed(err.to_string()));
                                    return;
                                }
                            };
                            if let Some(event) = forwarded {
                                if sender.send(event).is_err() {
                                    return;
                                }
                            }
                        }
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!("failed to poll terminal events: {err}");
                            let _ = sender.send(Event::InputClosed(err.to_string()));
                            return;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if sender.send(Event::Tick).is_err() {
                            return;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
        };

        Self {
            sender,
            receiver,
            handler,
        }
    }

    /// Sender for posting events from other threads
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
