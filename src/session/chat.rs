//! Chat session
//!
//! Owns the conversation transcript for the chat widget. The
//! transcript is append-only and never reordered; a pending flag is
//! the sole admission-control mechanism, guaranteeing at most one
//! outbound AI request in flight and strict submission-order appends.
//!
//! Failures never leave the session: a failed gateway call becomes a
//! fixed assistant message and the session stays usable for further
//! attempts. Nothing is persisted across restarts.

use serde::{Deserialize, Serialize};

/// Assistant reply used when the gateway returns empty text
pub const EMPTY_REPLY_FALLBACK: &str = "I could not generate a response.";

/// Assistant reply used for any gateway failure, including a missing
/// credential
pub const CONNECTIVITY_ERROR_REPLY: &str =
    "I'm having trouble connecting to the AI service right now. Please try again later.";

/// Who produced a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Outcome of [`ChatSession::begin_submission`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The user turn was appended; the caller must now invoke the
    /// gateway and complete or fail the turn.
    Accepted {
        /// Trimmed message text to forward to the gateway
        message: String,
        /// Transcript as it stood before the user turn, for the
        /// gateway call signature
        prior_transcript: Vec<ChatMessage>,
    },
    /// Blank input or a request already pending; nothing changed.
    Ignored,
}

/// Conversation state for one page-load-equivalent session
#[derive(Debug)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    pending: bool,
    open: bool,
}

impl ChatSession {
    /// Create a session seeded with the assistant greeting
    pub fn new(owner_name: &str) -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(format!(
                "Hello. I am an AI assistant trained on {owner_name}'s work. How can I help?"
            ))],
            pending: false,
            open: false,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn open(&self) -> bool {
        self.open
    }

    /// Show or hide the widget
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// First half of a submission: admission check plus user-turn append
    ///
    /// Returns [`Submission::Ignored`] when `text` trims to nothing or
    /// a request is already pending; the transcript is untouched in
    /// that case. Otherwise the user turn is appended and the pending
    /// flag set before any await point, so a concurrent submission
    /// observes it.
    pub fn begin_submission(&mut self, text: &str) -> Submission {
        let message = text.trim();
        if message.is_empty() || self.pending {
            return Submission::Ignored;
        }

        let prior_transcript = self.transcript.clone();
        self.transcript.push(ChatMessage::user(message));
        self.pending = true;

        Submission::Accepted {
            message: message.to_string(),
            prior_transcript,
        }
    }

    /// Complete the pending turn with the gateway reply
    ///
    /// An empty reply is substituted with the fixed fallback literal.
    pub fn complete(&mut self, reply: &str) {
        let text = if reply.trim().is_empty() {
            EMPTY_REPLY_FALLBACK
        } else {
            reply
        };
        self.transcript.push(ChatMessage::assistant(text));
        self.pending = false;
    }

    /// Fail the pending turn
    ///
    /// The failure is terminal for this turn and surfaced only as a
    /// transcript entry.
    pub fn fail(&mut self) {
        self.transcript
            .push(ChatMessage::assistant(CONNECTIVITY_ERROR_REPLY));
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_greeting_mentioning_owner() {
        let session = ChatSession::new("Noa Lindqvist");

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, Role::Assistant);
        assert!(session.transcript()[0].text.contains("Noa Lindqvist"));
        assert!(!session.pending());
        assert!(!session.open());
    }

    #[test]
    fn submission_appends_user_turn_and_sets_pending() {
        let mut session = ChatSession::new("Owner");

        let submission = session.begin_submission("  What do you build?  ");

        match submission {
            Submission::Accepted {
                message,
                prior_transcript,
            } => {
                assert_eq!(message, "What do you build?");
                assert_eq!(prior_transcript.len(), 1);
            }
            Submission::Ignored => panic!("expected accepted submission"),
        }
        assert!(session.pending());
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1], ChatMessage::user("What do you build?"));
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut session = ChatSession::new("Owner");

        assert_eq!(session.begin_submission("   \n "), Submission::Ignored);
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.pending());
    }

    #[test]
    fn submission_while_pending_is_ignored() {
        let mut session = ChatSession::new("Owner");
        session.begin_submission("first");

        let before = session.transcript().len();
        assert_eq!(session.begin_submission("second"), Submission::Ignored);
        assert_eq!(session.transcript().len(), before);
    }

    #[test]
    fn complete_appends_reply_and_clears_pending() {
        let mut session = ChatSession::new("Owner");
        session.begin_submission("question");

        session.complete("an answer");

        assert!(!session.pending());
        assert_eq!(
            session.transcript().last(),
            Some(&ChatMessage::assistant("an answer"))
        );
    }

    #[test]
    fn empty_reply_substitutes_fallback() {
        let mut session = ChatSession::new("Owner");
        session.begin_submission("question");

        session.complete("   ");

        assert_eq!(
            session.transcript().last(),
            Some(&ChatMessage::assistant(EMPTY_REPLY_FALLBACK))
        );
    }

    #[test]
    fn failure_appends_exactly_one_error_turn() {
        let mut session = ChatSession::new("Owner");
        session.begin_submission("question");
        let before = session.transcript().len();

        session.fail();

        assert_eq!(session.transcript().len(), before + 1);
        assert_eq!(
            session.transcript().last(),
            Some(&ChatMessage::assistant(CONNECTIVITY_ERROR_REPLY))
        );
        assert!(!session.pending());
    }

    #[test]
    fn session_remains_usable_after_failure() {
        let mut session = ChatSession::new("Owner");
        session.begin_submission("question");
        session.fail();

        assert!(matches!(
            session.begin_submission("again"),
            Submission::Accepted { .. }
        ));
    }
}
