//! Chat transcript formatting

use crate::models::{ChatMessage, Role};

/// Format one message as `speaker: text`
pub fn format_message(message: &ChatMessage) -> String {
    let speaker = match message.role {
        Role::User => "you",
        Role::Assistant => "bot",
        Role::System => "system",
    };

    let mut lines = message.content.lines();
    let mut output = format!("{:>6}: {}", speaker, lines.next().unwrap_or_default());
    for line in lines {
        output.push('\n');
        output.push_str(&format!("{:>6}  {}", "", line));
    }
    output
}

/// Format a whole transcript, one message per block
pub fn format_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(format_message)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_indents_continuation_lines() {
        let text = format_message(&ChatMessage::assistant("one\ntwo"));
        assert_eq!(text, "   bot: one\n         two");
    }

    #[test]
    fn test_format_transcript() {
        let text = format_transcript(&[
            ChatMessage::assistant("Hello! How can I assist you today?"),
            ChatMessage::user("hi"),
        ]);
        assert_eq!(
            text,
            "   bot: Hello! How can I assist you today?\n   you: hi"
        );
    }
}
