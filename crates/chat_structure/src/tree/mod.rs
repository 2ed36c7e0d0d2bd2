//! Tree module - Branching conversations
//!
//! Provides the ConversationTree arena and the BranchView screen state.

mod branch;
mod conversation;
mod view;

pub use branch::{Branch, BranchId};
pub use conversation::{ConversationTree, ROOT_BRANCH_ID};
pub use view::{branch_color, BranchView, SendOutcome, BRANCH_PALETTE};
