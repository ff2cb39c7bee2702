//! Message types for the conversation list.

use serde::{Deserialize, Serialize};

/// Identifier of a message, derived from the list length when it was created.
pub type MessageId = u64;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the person at the keyboard.
    User,
    /// Synthesized reply.
    Bot,
}

impl Sender {
    /// Label used in plain-text transcripts.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single entry in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
}

impl Message {
    /// Create a user message.
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::User,
        }
    }

    /// Create a bot message.
    pub fn bot(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::Bot,
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
