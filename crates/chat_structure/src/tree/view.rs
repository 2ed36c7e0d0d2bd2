//! BranchView - State of the branching chat screen
//!
//! Wraps a ConversationTree with the active branch, the optional branch
//! shown side by side for comparison, and the send routing policy.

use serde::{Deserialize, Serialize};

use super::branch::BranchId;
use super::conversation::ConversationTree;
use crate::error::{ChatStructureError, Result};
use crate::message::Message;

/// Colors assigned to branches by id, wrapping around.
pub const BRANCH_PALETTE: [&str; 7] = [
    "#3B82F6", // blue
    "#10B981", // green
    "#F59E0B", // yellow
    "#EC4899", // pink
    "#8B5CF6", // purple
    "#F43F5E", // red
    "#06B6D4", // cyan
];

pub fn branch_color(id: BranchId) -> &'static str {
    BRANCH_PALETTE[(id % BRANCH_PALETTE.len() as u64) as usize]
}

/// What happened to a message handed to [`BranchView::send_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SendOutcome {
    /// Input was blank
    Ignored,
    /// Added to the end of the given branch
    Appended(BranchId),
    /// Started the given new branch, which is now active
    Branched(BranchId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchView {
    tree: ConversationTree,
    active: BranchId,
    comparison: Option<BranchId>,
}

impl BranchView {
    /// Start on the root branch with no comparison open
    pub fn new(tree: ConversationTree) -> Self {
        let active = tree.root_id();
        Self {
            tree,
            active,
            comparison: None,
        }
    }

    pub fn tree(&self) -> &ConversationTree {
        &self.tree
    }

    pub fn active(&self) -> BranchId {
        self.active
    }

    pub fn comparison(&self) -> Option<BranchId> {
        self.comparison
    }

    /// Route a user message.
    ///
    /// If the active branch ends on an assistant turn the message starts a
    /// new child branch, which becomes active. Otherwise it is appended to
    /// the active branch.
    pub fn send_message(&mut self, content: &str) -> Result<SendOutcome> {
        if content.trim().is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        let active = self
            .tree
            .branch(self.active)
            .ok_or(ChatStructureError::UnknownBranch(self.active))?;

        if active.ends_with_assistant() {
            tracing::debug!(active = self.active, "BranchView: Active branch ends with assistant, forking");
            self.branch_from_active(content)
        } else {
            self.tree.append_message(self.active, content)?;
            Ok(SendOutcome::Appended(self.active))
        }
    }

    /// Always start a new child of the active branch (the explicit branch button)
    pub fn force_branch(&mut self, content: &str) -> Result<SendOutcome> {
        if content.trim().is_empty() {
            return Ok(SendOutcome::Ignored);
        }
        self.branch_from_active(content)
    }

    fn branch_from_active(&mut self, content: &str) -> Result<SendOutcome> {
        let new_id = self.tree.create_branch(self.active, content)?.id();
        self.active = new_id;
        Ok(SendOutcome::Branched(new_id))
    }

    pub fn set_active(&mut self, id: BranchId) -> Result<()> {
        if !self.tree.contains(id) {
            return Err(ChatStructureError::UnknownBranch(id));
        }
        tracing::debug!(from = self.active, to = id, "BranchView: Switching active branch");
        self.active = id;
        Ok(())
    }

    /// Open `id` in the comparison pane, or close the pane if `id` is
    /// already shown there.
    pub fn toggle_comparison(&mut self, id: BranchId) -> Result<()> {
        if !self.tree.contains(id) {
            return Err(ChatStructureError::UnknownBranch(id));
        }
        self.comparison = if self.comparison == Some(id) {
            None
        } else {
            Some(id)
        };
        Ok(())
    }

    pub fn clear_comparison(&mut self) {
        self.comparison = None;
    }

    pub fn active_chain(&self) -> Result<Vec<Message>> {
        self.tree.resolve_chain(self.active)
    }

    /// Chain of the comparison branch, if one is open
    pub fn comparison_chain(&self) -> Result<Option<Vec<Message>>> {
        self.comparison
            .map(|id| self.tree.resolve_chain(id))
            .transpose()
    }

    pub fn branch_label(&self, id: BranchId) -> String {
        if id == self.tree.root_id() {
            "Root".to_string()
        } else {
            format!("Branch {id}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BranchView {
        BranchView::new(ConversationTree::new(vec![
            Message::user(1, "How do I perform a git rebase?"),
            Message::assistant(2, "To perform a git rebase, follow these steps..."),
        ]))
    }

    #[test]
    fn test_send_forks_after_assistant_turn() {
        let mut view = view();
        let outcome = view.send_message("How do I abort a rebase?").unwrap();

        assert_eq!(outcome, SendOutcome::Branched(1));
        assert_eq!(view.active(), 1);
        assert_eq!(view.active_chain().unwrap().len(), 4);
    }

    #[test]
    fn test_send_appends_after_user_turn() {
        let mut view = BranchView::new(ConversationTree::new(vec![Message::user(1, "Hello")]));
        let outcome = view.send_message("Anyone there?").unwrap();

        assert_eq!(outcome, SendOutcome::Appended(0));
        assert_eq!(view.tree().len(), 1);
        assert_eq!(view.active_chain().unwrap().len(), 3);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut view = view();
        assert_eq!(view.send_message("   ").unwrap(), SendOutcome::Ignored);
        assert_eq!(view.force_branch("").unwrap(), SendOutcome::Ignored);
        assert_eq!(view.tree().len(), 1);
    }

    #[test]
    fn test_toggle_comparison() {
        let mut view = view();
        view.force_branch("side question").unwrap();

        view.toggle_comparison(0).unwrap();
        assert_eq!(view.comparison(), Some(0));
        assert_eq!(view.comparison_chain().unwrap().map(|c| c.len()), Some(2));

        view.toggle_comparison(0).unwrap();
        assert_eq!(view.comparison(), None);

        assert_eq!(
            view.toggle_comparison(9).unwrap_err(),
            ChatStructureError::UnknownBranch(9)
        );
    }

    #[test]
    fn test_labels_and_colors() {
        let view = view();
        assert_eq!(view.branch_label(0), "Root");
        assert_eq!(view.branch_label(3), "Branch 3");
        assert_eq!(branch_color(0), "#3B82F6");
        assert_eq!(branch_color(7), "#3B82F6");
        assert_eq!(branch_color(6), "#06B6D4");
    }
}
