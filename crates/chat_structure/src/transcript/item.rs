use serde::{Deserialize, Serialize};

use crate::message::{Message, MessageId, Sender};

/// Identifier of a section. Sections and messages share one id space.
pub type SectionId = u64;

/// A named, collapsible boundary. It covers every message up to the next
/// section.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub is_expanded: bool,
}

impl Section {
    /// New sections start expanded
    pub fn new(id: SectionId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_expanded: true,
        }
    }
}

/// A message as placed in a transcript.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TranscriptMessage {
    pub message: Message,
    /// Set when a section marker sits directly above this message
    #[serde(default)]
    pub has_section: bool,
}

impl TranscriptMessage {
    pub fn new(message: Message) -> Self {
        Self {
            message,
            has_section: false,
        }
    }

    /// Only user turns without a section above them offer "add section above"
    pub fn can_add_section(&self) -> bool {
        self.message.sender() == Sender::User && !self.has_section
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptItem {
    Section(Section),
    Message(TranscriptMessage),
}

impl TranscriptItem {
    pub fn section(id: SectionId, title: impl Into<String>) -> Self {
        Self::Section(Section::new(id, title))
    }

    pub fn message(message: Message) -> Self {
        Self::Message(TranscriptMessage::new(message))
    }

    pub fn id(&self) -> u64 {
        match self {
            Self::Section(section) => section.id,
            Self::Message(entry) => entry.message.id(),
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Section(section) => Some(section),
            Self::Message(_) => None,
        }
    }

    pub fn as_message(&self) -> Option<&TranscriptMessage> {
        match self {
            Self::Section(_) => None,
            Self::Message(entry) => Some(entry),
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Self::Section(_))
    }

    pub(crate) fn is_message_with_id(&self, id: MessageId) -> bool {
        match self {
            Self::Section(_) => false,
            Self::Message(entry) => entry.message.id() == id,
        }
    }
}

impl From<Message> for TranscriptItem {
    fn from(message: Message) -> Self {
        Self::message(message)
    }
}

impl From<Section> for TranscriptItem {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}
