//! Error types for tree, transcript and configuration operations.

use thiserror::Error;

use crate::message::MessageId;
use crate::transcript::SectionId;
use crate::tree::BranchId;

/// Validation failures raised by the structures in this crate.
///
/// None of these are transient; callers turn them into a no-op or a
/// user-visible message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatStructureError {
    #[error("unknown branch: {0}")]
    UnknownBranch(BranchId),

    #[error("parent branch {0} does not exist")]
    InvalidParent(BranchId),

    #[error("cycle detected in parent links starting from branch {0}")]
    CycleDetected(BranchId),

    #[error("unknown section: {0}")]
    UnknownSection(SectionId),

    #[error("unknown message: {0}")]
    UnknownMessage(MessageId),

    #[error("conversation tree has no root branch")]
    MissingRoot,

    #[error("conversation tree has more than one root branch: {0:?}")]
    MultipleRoots(Vec<BranchId>),

    #[error("branch {0} is defined more than once")]
    DuplicateBranch(BranchId),

    #[error("no ids left after {0}")]
    IdSpaceExhausted(u64),

    #[error("section title cannot be empty")]
    EmptyTitle,

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChatStructureError>;
