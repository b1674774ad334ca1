//! Chat transcript state for the assistant panel.

use crate::markup::{self, Segment};

/// Fixed assistant line appended when the chat endpoint is unreachable.
pub const OUTAGE_REPLY: &str = "SYSTEM OUTAGE: Unable to connect to Sentinel AI subroutines.";

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One transcript entry, markup already resolved into segments.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub segments: Vec<Segment>,
}

/// Append-only, session-scoped conversation plus the transient typing
/// indicator shown while a reply is in flight.
#[derive(Debug, Default)]
pub struct ChatTranscript {
    turns: Vec<ChatTurn>,
    typing: bool,
}

impl ChatTranscript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn. User text is rendered verbatim, no markup.
    pub fn push_user(&mut self, text: &str) {
        self.turns.push(ChatTurn {
            speaker: Speaker::User,
            segments: vec![Segment {
                text: text.to_string(),
                bold: false,
            }],
        });
    }

    /// Append an assistant turn, resolving `**bold**` emphasis.
    pub fn push_assistant(&mut self, text: &str) {
        self.turns.push(ChatTurn {
            speaker: Speaker::Assistant,
            segments: markup::parse(text),
        });
    }

    /// Show or hide the typing indicator.
    pub fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
    }

    #[must_use]
    pub fn typing(&self) -> bool {
        self.typing
    }

    /// Turns in submission order.
    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_keep_submission_order() {
        let mut transcript = ChatTranscript::new();
        transcript.push_user("is this link safe?");
        transcript.push_assistant("Checking it now.");
        transcript.push_user("thanks");

        let speakers: Vec<_> = transcript.turns().iter().map(|t| t.speaker).collect();
        assert_eq!(
            speakers,
            vec![Speaker::User, Speaker::Assistant, Speaker::User]
        );
    }

    #[test]
    fn assistant_markup_is_resolved() {
        let mut transcript = ChatTranscript::new();
        transcript.push_assistant("Never reuse **passwords** across sites.");
        let turn = &transcript.turns()[0];
        assert!(turn.segments.iter().any(|s| s.bold && s.text == "passwords"));
    }

    #[test]
    fn user_markup_is_left_verbatim() {
        let mut transcript = ChatTranscript::new();
        transcript.push_user("what does **bold** mean?");
        let turn = &transcript.turns()[0];
        assert_eq!(turn.segments.len(), 1);
        assert!(!turn.segments[0].bold);
        assert_eq!(turn.segments[0].text, "what does **bold** mean?");
    }

    #[test]
    fn typing_indicator_toggles() {
        let mut transcript = ChatTranscript::new();
        assert!(!transcript.typing());
        transcript.set_typing(true);
        assert!(transcript.typing());
        transcript.set_typing(false);
        assert!(!transcript.typing());
    }
}
