//! ConversationTree - Arena of branches linked by parent ids
//!
//! Branches are stored flat, keyed by id. A branch's full history (its
//! chain) is rebuilt on demand by walking parent ids up to the root.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::branch::{Branch, BranchId};
use crate::config::ChatConfig;
use crate::error::{ChatStructureError, Result};
use crate::message::{Message, MessageId};

/// Id given to the root branch by [`ConversationTree::new`].
pub const ROOT_BRANCH_ID: BranchId = 0;

/// A set of branches forming a tree, plus the text used for generated
/// assistant replies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TreeState", into = "TreeState")]
pub struct ConversationTree {
    branches: BTreeMap<BranchId, Branch>,
    root: BranchId,
    placeholder_reply: String,
}

/// Serialized form. Deserializing goes through [`ConversationTree::from_branches`]
/// so a loaded tree has the same guarantees as a constructed one.
#[derive(Serialize, Deserialize)]
struct TreeState {
    branches: Vec<Branch>,
    placeholder_reply: String,
}

impl TryFrom<TreeState> for ConversationTree {
    type Error = ChatStructureError;

    fn try_from(state: TreeState) -> Result<Self> {
        Ok(Self::from_branches(state.branches)?.with_placeholder_reply(state.placeholder_reply))
    }
}

impl From<ConversationTree> for TreeState {
    fn from(tree: ConversationTree) -> Self {
        Self {
            branches: tree.branches.into_values().collect(),
            placeholder_reply: tree.placeholder_reply,
        }
    }
}

impl ConversationTree {
    /// Create a tree holding a single root branch (id 0).
    pub fn new(root_messages: Vec<Message>) -> Self {
        let root = Branch::root(ROOT_BRANCH_ID, root_messages);
        Self {
            branches: BTreeMap::from([(ROOT_BRANCH_ID, root)]),
            root: ROOT_BRANCH_ID,
            placeholder_reply: ChatConfig::default().placeholder_reply,
        }
    }

    /// Build a tree from explicit branches.
    ///
    /// Requires exactly one root, unique ids and parents that exist. Cycles
    /// among non-root branches are not rejected here; [`Self::resolve_chain`]
    /// reports them.
    pub fn from_branches(branches: impl IntoIterator<Item = Branch>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for branch in branches {
            let id = branch.id();
            if map.insert(id, branch).is_some() {
                return Err(ChatStructureError::DuplicateBranch(id));
            }
        }

        let roots: Vec<BranchId> = map.values().filter(|b| b.is_root()).map(Branch::id).collect();
        let root = match roots.as_slice() {
            [] => return Err(ChatStructureError::MissingRoot),
            [root] => *root,
            _ => return Err(ChatStructureError::MultipleRoots(roots)),
        };

        if let Some(parent) = map
            .values()
            .filter_map(Branch::parent_id)
            .find(|parent| !map.contains_key(parent))
        {
            return Err(ChatStructureError::InvalidParent(parent));
        }

        tracing::debug!(branch_count = map.len(), root = root, "ConversationTree: Built from branches");

        Ok(Self {
            branches: map,
            root,
            placeholder_reply: ChatConfig::default().placeholder_reply,
        })
    }

    /// Use a different text for generated assistant replies
    pub fn with_placeholder_reply(mut self, reply: impl Into<String>) -> Self {
        self.placeholder_reply = reply.into();
        self
    }

    /// Apply the reply text from a loaded config
    pub fn with_config(self, config: &ChatConfig) -> Self {
        self.with_placeholder_reply(config.placeholder_reply.clone())
    }

    pub fn placeholder_reply(&self) -> &str {
        &self.placeholder_reply
    }

    pub fn root_id(&self) -> BranchId {
        self.root
    }

    pub fn branch(&self, id: BranchId) -> Option<&Branch> {
        self.branches.get(&id)
    }

    pub fn contains(&self, id: BranchId) -> bool {
        self.branches.contains_key(&id)
    }

    /// All branches in id order
    pub fn branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.values()
    }

    // Never empty: a tree always holds its root.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Direct children of a branch, in id order
    pub fn children(&self, id: BranchId) -> Vec<&Branch> {
        self.branches
            .values()
            .filter(|b| b.parent_id() == Some(id))
            .collect()
    }

    /// Highest message id across every branch
    pub fn last_message_id(&self) -> Option<MessageId> {
        self.branches.values().filter_map(Branch::max_message_id).max()
    }

    pub fn next_branch_id(&self) -> Result<BranchId> {
        match self.branches.keys().next_back() {
            Some(&id) => id
                .checked_add(1)
                .ok_or(ChatStructureError::IdSpaceExhausted(id)),
            None => Ok(ROOT_BRANCH_ID),
        }
    }

    /// Ids for a user message and the reply that follows it
    fn next_message_ids(&self) -> Result<(MessageId, MessageId)> {
        let Some(last) = self.last_message_id() else {
            return Ok((1, 2));
        };
        last.checked_add(1)
            .zip(last.checked_add(2))
            .ok_or(ChatStructureError::IdSpaceExhausted(last))
    }

    /// Create a child of `parent_id` holding the user's message and a
    /// placeholder assistant reply.
    pub fn create_branch(
        &mut self,
        parent_id: BranchId,
        first_message_content: impl Into<String>,
    ) -> Result<&Branch> {
        if !self.contains(parent_id) {
            return Err(ChatStructureError::InvalidParent(parent_id));
        }

        let branch_id = self.next_branch_id()?;
        let (message_id, reply_id) = self.next_message_ids()?;
        let branch = Branch::new(
            branch_id,
            Some(parent_id),
            vec![
                Message::user(message_id, first_message_content),
                Message::assistant(reply_id, self.placeholder_reply.clone()),
            ],
        );

        tracing::info!(
            branch_id = branch_id,
            parent_id = parent_id,
            first_message_id = message_id,
            "ConversationTree: Created branch"
        );

        let branch: &Branch = self.branches.entry(branch_id).or_insert(branch);
        Ok(branch)
    }

    /// Append the user's message and a placeholder assistant reply to an
    /// existing branch.
    pub fn append_message(&mut self, branch_id: BranchId, content: impl Into<String>) -> Result<()> {
        if !self.contains(branch_id) {
            return Err(ChatStructureError::UnknownBranch(branch_id));
        }
        let (message_id, reply_id) = self.next_message_ids()?;
        let reply = self.placeholder_reply.clone();
        let branch = self
            .branches
            .get_mut(&branch_id)
            .ok_or(ChatStructureError::UnknownBranch(branch_id))?;

        branch.push(Message::user(message_id, content));
        branch.push(Message::assistant(reply_id, reply));

        tracing::info!(
            branch_id = branch_id,
            message_count = branch.messages().len(),
            "ConversationTree: Appended message"
        );
        Ok(())
    }

    /// Branches from the root down to `branch_id`, root first.
    ///
    /// The walk is bounded by the branch count, so a cycle in the parent
    /// links fails instead of looping.
    fn ancestry(&self, branch_id: BranchId) -> Result<Vec<&Branch>> {
        let mut lineage = Vec::new();
        let mut current = Some(branch_id);

        while let Some(id) = current {
            if lineage.len() >= self.branches.len() {
                tracing::warn!(branch_id = branch_id, "ConversationTree: Parent links form a cycle");
                return Err(ChatStructureError::CycleDetected(branch_id));
            }
            let branch = self
                .branches
                .get(&id)
                .ok_or(ChatStructureError::UnknownBranch(id))?;
            lineage.push(branch);
            current = branch.parent_id();
        }

        lineage.reverse();
        Ok(lineage)
    }

    /// The full history of a branch: every ancestor's messages followed by
    /// its own, each branch keeping its internal order.
    pub fn resolve_chain(&self, branch_id: BranchId) -> Result<Vec<Message>> {
        let lineage = self.ancestry(branch_id)?;
        let chain: Vec<Message> = lineage
            .iter()
            .flat_map(|b| b.messages().iter().cloned())
            .collect();

        tracing::debug!(
            branch_id = branch_id,
            depth = lineage.len(),
            message_count = chain.len(),
            "ConversationTree: Resolved chain"
        );
        Ok(chain)
    }

    /// Messages in the chain of `branch_id` after which the chain crosses
    /// from a parent branch into its child. Ancestors without messages
    /// contribute nothing.
    pub fn fork_points(&self, branch_id: BranchId) -> Result<Vec<MessageId>> {
        let lineage = self.ancestry(branch_id)?;
        let points = lineage
            .iter()
            .take(lineage.len().saturating_sub(1))
            .filter_map(|ancestor| ancestor.last_message())
            .map(Message::id)
            .collect();
        Ok(points)
    }
}
