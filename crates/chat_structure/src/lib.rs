//! chat_structure - Conversation structuring for the chat mock-ups
//!
//! This crate holds the state behind the standard, branching and folding
//! chat screens:
//! - `tree` - ConversationTree of branches and the BranchView screen state
//! - `transcript` - SectionedTranscript of sections and messages
//! - `search` - substring filtering, in-chat search and suggestions
//! - `fixtures` - the sample data the screens start from
//!
//! Everything is in memory. Assistant replies are a placeholder string.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod message;
pub mod search;
pub mod transcript;
pub mod tree;

// Re-export commonly used types
pub use config::ChatConfig;
pub use error::{ChatStructureError, Result};
pub use message::{Message, MessageId, Sender};
pub use search::{
    filter_by_query, ChatSearch, ConversationCatalog, ConversationSummary, HistoryEntry,
    QueryFilter, SuggestionIndex,
};
pub use transcript::{
    ComparisonSelection, Section, SectionContent, SectionId, SectionedTranscript,
    TranscriptItem, TranscriptMessage,
};
pub use tree::{Branch, BranchId, BranchView, ConversationTree, SendOutcome};
