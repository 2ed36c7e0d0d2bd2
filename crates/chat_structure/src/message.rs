//! Message - A single chat turn
//!
//! Shared by the conversation tree and the sectioned transcript.

use serde::{Deserialize, Serialize};

/// Identifier of a message, unique within the structure that owns it.
pub type MessageId = u64;

/// Who authored a message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "User",
            Sender::Assistant => "Assistant",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable chat message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    content: String,
}

impl Message {
    pub fn new(id: MessageId, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            content: content.into(),
        }
    }

    /// Create a message sent by the user
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, Sender::User, content)
    }

    /// Create a message sent by the assistant
    pub fn assistant(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, Sender::Assistant, content)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_from_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }
}
