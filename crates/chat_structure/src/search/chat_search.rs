//! ChatSearch - Find-in-conversation with a result cursor

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Matches of the current query inside one conversation, and which of
/// them is highlighted.
///
/// Unlike the sidebar search there is no length threshold: any non-blank
/// query searches.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatSearch {
    query: String,
    results: Vec<Message>,
    cursor: usize,
}

impl ChatSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `query` over `messages`, resetting the cursor to the first hit.
    /// Returns the number of hits.
    pub fn search(&mut self, messages: &[Message], query: &str) -> usize {
        self.query = query.to_string();
        self.cursor = 0;
        self.results = if query.trim().is_empty() {
            Vec::new()
        } else {
            let needle = query.to_lowercase();
            messages
                .iter()
                .filter(|m| m.content().to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };

        tracing::debug!(query = %query, hits = self.results.len(), "ChatSearch: Searched conversation");
        self.results.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Message] {
        &self.results
    }

    /// The highlighted hit
    pub fn current(&self) -> Option<&Message> {
        self.results.get(self.cursor)
    }

    /// 1-based index of the highlighted hit and the hit count, e.g. "2 of 3"
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.results.is_empty()).then(|| (self.cursor + 1, self.results.len()))
    }

    /// Move to the next hit, wrapping past the last one
    pub fn next_result(&mut self) -> Option<&Message> {
        if !self.results.is_empty() {
            self.cursor = (self.cursor + 1) % self.results.len();
        }
        self.current()
    }

    /// Move to the previous hit, wrapping past the first one
    pub fn prev_result(&mut self) -> Option<&Message> {
        if !self.results.is_empty() {
            let len = self.results.len();
            self.cursor = (self.cursor + len - 1) % len;
        }
        self.current()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.cursor = 0;
    }
}
