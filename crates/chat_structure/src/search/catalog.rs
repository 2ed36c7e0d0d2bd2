//! Sidebar conversation list and input suggestions

use serde::{Deserialize, Serialize};

use super::filter::{FieldFn, QueryFilter};

/// A conversation as listed in the sidebar.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConversationSummary {
    pub id: u64,
    pub title: String,
    /// Display bucket such as "Today" or "Previous 30 Days"
    pub date: String,
    pub preview: String,
}

impl ConversationSummary {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        date: impl Into<String>,
        preview: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date: date.into(),
            preview: preview.into(),
        }
    }
}

fn summary_title(summary: &ConversationSummary) -> &str {
    &summary.title
}

fn summary_preview(summary: &ConversationSummary) -> &str {
    &summary.preview
}

const SUMMARY_FIELDS: [FieldFn<ConversationSummary>; 2] = [summary_title, summary_preview];

/// Starred and recent conversations.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationCatalog {
    pub starred: Vec<ConversationSummary>,
    pub recent: Vec<ConversationSummary>,
}

impl ConversationCatalog {
    pub fn new(starred: Vec<ConversationSummary>, recent: Vec<ConversationSummary>) -> Self {
        Self { starred, recent }
    }

    /// Conversations whose title or preview contains the query, starred first
    pub fn search(&self, query: &str) -> Vec<&ConversationSummary> {
        self.search_with(&QueryFilter::default(), query)
    }

    pub fn search_with(&self, filter: &QueryFilter, query: &str) -> Vec<&ConversationSummary> {
        let mut results = filter.filter(&self.starred, query, &SUMMARY_FIELDS);
        results.extend(filter.filter(&self.recent, query, &SUMMARY_FIELDS));
        tracing::debug!(query = %query, hits = results.len(), "ConversationCatalog: Searched");
        results
    }
}

/// A previously asked question and the conversation it came from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub question: String,
    pub conversation: String,
}

impl HistoryEntry {
    pub fn new(question: impl Into<String>, conversation: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            conversation: conversation.into(),
        }
    }
}

fn entry_question(entry: &HistoryEntry) -> &str {
    &entry.question
}

const HISTORY_FIELDS: [FieldFn<HistoryEntry>; 1] = [entry_question];

/// Suggests earlier questions while the user types.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SuggestionIndex {
    entries: Vec<HistoryEntry>,
}

impl SuggestionIndex {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn suggest(&self, input: &str) -> Vec<&HistoryEntry> {
        self.suggest_with(&QueryFilter::default(), input)
    }

    pub fn suggest_with(&self, filter: &QueryFilter, input: &str) -> Vec<&HistoryEntry> {
        filter.filter(&self.entries, input, &HISTORY_FIELDS)
    }
}
