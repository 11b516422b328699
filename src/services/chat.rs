//! Chat service
//!
//! Runs one chat-completion turn at a time against a [`ChatBackend`].
//! A failed turn is logged and dropped: the user's message stays in the
//! transcript and no reply is appended. There is no retry.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::{VerziError, VerziResult};
use crate::models::{ChatMessage, ChatSession};

/// Something that can answer a transcript with one assistant message
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Complete the conversation so far
    async fn complete(&self, messages: &[ChatMessage]) -> VerziResult<ChatMessage>;
}

#[async_trait]
impl<T: ChatBackend + ?Sized> ChatBackend for Arc<T> {
    async fn complete(&self, messages: &[ChatMessage]) -> VerziResult<ChatMessage> {
        (**self).complete(messages).await
    }
}

/// Service driving a chat session
pub struct ChatService<B> {
    backend: B,
}

impl<B: ChatBackend> ChatService<B> {
    /// Create a new chat service
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Send a user message and wait for the reply
    ///
    /// Returns `Ok(None)` when the input is blank. On failure the turn is
    /// dropped and the error returned.
    pub async fn send(
        &self,
        session: &mut ChatSession,
        input: &str,
    ) -> VerziResult<Option<ChatMessage>> {
        let Some(payload) = begin_turn(session, input)? else {
            return Ok(None);
        };

        let result = self.backend.complete(&payload).await;
        finish_turn(session, result).map(Some)
    }
}

/// Start a turn, returning the transcript to send
pub fn begin_turn(session: &mut ChatSession, input: &str) -> VerziResult<Option<Vec<ChatMessage>>> {
    session
        .begin_turn(input)
        .map_err(|e| VerziError::Chat(e.to_string()))
}

/// Apply a backend's answer to the session
pub fn finish_turn(
    session: &mut ChatSession,
    result: VerziResult<ChatMessage>,
) -> VerziResult<ChatMessage> {
    match result {
        Ok(reply) => {
            info!(chars = reply.content.len(), "chat reply received");
            session.finish_turn(Some(reply.clone()));
            Ok(reply)
        }
        Err(err) => {
            error!("Error fetching response: {err}");
            session.finish_turn(None);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Backend that replays canned answers and records what it was sent
    struct ScriptedBackend {
        replies: Mutex<Vec<VerziResult<ChatMessage>>>,
        seen: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<VerziResult<ChatMessage>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn complete(&self, messages: &[ChatMessage]) -> VerziResult<ChatMessage> {
            self.seen.lock().unwrap().push(messages.to_vec());
            self.replies.lock().unwrap().remove(0)
        }
    }

    #[tokio::test]
    async fn test_successful_turn_appends_reply() {
        let service = ChatService::new(ScriptedBackend::new(vec![Ok(ChatMessage::assistant(
            "We build tools.",
        ))]));
        let mut session = ChatSession::new("Hello! How can I assist you today?");

        let reply = service.send(&mut session, "What do you do?").await.unwrap();

        assert_eq!(reply, Some(ChatMessage::assistant("We build tools.")));
        assert_eq!(session.len(), 3);
        assert!(!session.is_pending());

        let seen = service.backend().seen.lock().unwrap();
        assert_eq!(seen[0].len(), 2);
        assert_eq!(seen[0][1], ChatMessage::user("What do you do?"));
    }

    #[tokio::test]
    async fn test_failed_turn_is_dropped() {
        let service = ChatService::new(ScriptedBackend::new(vec![Err(VerziError::Http(
            "connection refused".into(),
        ))]));
        let mut session = ChatSession::new("Hi");

        let err = service.send(&mut session, "hello").await.unwrap_err();

        assert!(matches!(err, VerziError::Http(_)));
        assert_eq!(session.len(), 2);
        assert!(session.messages()[1].is_user());
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_blank_input_skips_backend() {
        let service = ChatService::new(ScriptedBackend::new(Vec::new()));
        let mut session = ChatSession::new("Hi");

        assert_eq!(service.send(&mut session, "  ").await.unwrap(), None);
        assert!(service.backend().seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_begin_while_pending_is_chat_error() {
        let mut session = ChatSession::new("Hi");
        begin_turn(&mut session, "one").unwrap();
        let err = begin_turn(&mut session, "two").unwrap_err();
        assert!(matches!(err, VerziError::Chat(_)));
    }
}
