//! Chat transcript model
//!
//! An ordered list of `{role, content}` messages plus a pending flag for
//! the single in-flight completion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    #[serde(alias = "bot")]
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Why a turn could not be started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// A completion is still outstanding
    Busy,
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "A reply is still pending"),
        }
    }
}

impl std::error::Error for TurnError {}

/// Transcript state for one conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    pending: bool,
}

impl ChatSession {
    /// Start a conversation with the assistant greeting
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(greeting)],
            pending: false,
        }
    }

    /// Begin a user turn
    ///
    /// Whitespace-only input is ignored and yields `Ok(None)`. Otherwise the
    /// user message is appended, the session is marked pending, and the
    /// full transcript to send is returned.
    pub fn begin_turn(&mut self, input: &str) -> Result<Option<Vec<ChatMessage>>, TurnError> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        if self.pending {
            return Err(TurnError::Busy);
        }

        self.transcript.push(ChatMessage::user(input));
        self.pending = true;
        Ok(Some(self.transcript.clone()))
    }

    /// Finish the pending turn
    ///
    /// `None` drops the assistant turn; the user message stays.
    pub fn finish_turn(&mut self, reply: Option<ChatMessage>) {
        self.pending = false;
        if let Some(message) = reply {
            self.transcript.push(message);
        }
    }

    /// Whether a completion is outstanding
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Messages in order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_greeting() {
        let session = ChatSession::new("Hi");
        assert_eq!(session.messages(), &[ChatMessage::assistant("Hi")]);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut session = ChatSession::new("Hi");
        assert_eq!(session.begin_turn("   \n"), Ok(None));
        assert_eq!(session.len(), 1);
        assert!(!session.is_pending());
    }

    #[test]
    fn test_turn_payload_includes_new_message() {
        let mut session = ChatSession::new("Hi");
        let payload = session.begin_turn("What is VerziBiz?").unwrap().unwrap();

        assert_eq!(payload.len(), 2);
        assert_eq!(payload[1], ChatMessage::user("What is VerziBiz?"));
        assert!(session.is_pending());
        assert_eq!(session.begin_turn("again"), Err(TurnError::Busy));
    }

    #[test]
    fn test_failed_turn_keeps_user_message() {
        let mut session = ChatSession::new("Hi");
        session.begin_turn("hello").unwrap();
        session.finish_turn(None);

        assert_eq!(session.len(), 2);
        assert!(session.messages()[1].is_user());
        assert!(!session.is_pending());
    }

    #[test]
    fn test_bot_role_alias() {
        let msg: ChatMessage = serde_json::from_str(r#"{"role":"bot","content":"x"}"#).unwrap();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(
            serde_json::to_string(&msg).unwrap(),
            r#"{"role":"assistant","content":"x"}"#
        );
    }
}
