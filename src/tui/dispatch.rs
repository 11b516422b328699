//! Background requests
//!
//! Chat completions and feedback submissions run on a tokio runtime owned
//! by the TUI. Each result is posted back to the event loop as an
//! [`Event`], so the UI thread never blocks on the network.

use std::sync::{mpsc, Arc};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::error::{VerziError, VerziResult};
use crate::services::{ChatBackend, FeedbackSink};

use super::app::Request;
use super::event::Event;

/// Spawns queued requests and reports their outcomes
pub struct Dispatcher {
    runtime: Runtime,
    chat: Arc<dyn ChatBackend>,
    feedback: Arc<dyn FeedbackSink>,
    sender: mpsc::Sender<Event>,
}

impl Dispatcher {
    pub fn new(
        chat: Arc<dyn ChatBackend>,
        feedback: Arc<dyn FeedbackSink>,
        sender: mpsc::Sender<Event>,
    ) -> VerziResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| VerziError::Tui(format!("Failed to start async runtime: {}", e)))?;

        Ok(Self {
            runtime,
            chat,
            feedback,
            sender,
        })
    }

    /// Start one request
    pub fn dispatch(&self, request: Request) {
        let sender = self.sender.clone();
        match request {
            Request::Chat(messages) => {
                debug!(messages = messages.len(), "dispatching chat request");
                let backend = Arc::clone(&self.chat);
                self.runtime.spawn(async move {
                    let result = backend.complete(&messages).await;
                    let _ = sender.send(Event::ChatReply(result));
                });
            }
            Request::Feedback(survey) => {
                debug!("dispatching feedback submission");
                let sink = Arc::clone(&self.feedback);
                self.runtime.spawn(async move {
                    let result = sink.submit(&survey.submission()).await;
                    let _ = sender.send(Event::FeedbackResult(result));
                });
            }
        }
    }
}
