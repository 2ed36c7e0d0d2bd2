//! Search module - Substring search and suggestions
//!
//! Plain case-insensitive substring matching over in-memory lists.

mod catalog;
mod chat_search;
mod filter;

pub use catalog::{ConversationCatalog, ConversationSummary, HistoryEntry, SuggestionIndex};
pub use chat_search::ChatSearch;
pub use filter::{filter_by_query, FieldFn, QueryFilter};
