use serde::{Deserialize, Serialize};

use crate::message::{Message, MessageId};

/// Identifier of a branch within a ConversationTree.
pub type BranchId = u64;

/// One divergent line of conversation. Holds only its own messages; the
/// messages it inherits live on its ancestors.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Branch {
    id: BranchId,
    /// `None` only for the root branch
    parent_id: Option<BranchId>,
    messages: Vec<Message>,
}

impl Branch {
    pub fn new(id: BranchId, parent_id: Option<BranchId>, messages: Vec<Message>) -> Self {
        Self {
            id,
            parent_id,
            messages,
        }
    }

    /// Create a root branch (no parent)
    pub fn root(id: BranchId, messages: Vec<Message>) -> Self {
        Self::new(id, None, messages)
    }

    pub fn id(&self) -> BranchId {
        self.id
    }

    pub fn parent_id(&self) -> Option<BranchId> {
        self.parent_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Whether the branch currently ends on an assistant turn
    pub fn ends_with_assistant(&self) -> bool {
        self.last_message().is_some_and(Message::is_from_assistant)
    }

    pub(crate) fn max_message_id(&self) -> Option<MessageId> {
        self.messages.iter().map(Message::id).max()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}
