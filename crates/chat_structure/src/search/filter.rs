use crate::config::{ChatConfig, DEFAULT_MIN_QUERY_LEN, DEFAULT_QUERY_STRIP_PHRASE};

/// Accessor for one searchable string field of an item.
pub type FieldFn<T> = fn(&T) -> &str;

/// Case-insensitive substring filter with a minimum query length and a
/// phrase stripped for a second match attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    min_query_len: usize,
    strip_phrase: String,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            strip_phrase: DEFAULT_QUERY_STRIP_PHRASE.to_string(),
        }
    }
}

impl From<&ChatConfig> for QueryFilter {
    fn from(config: &ChatConfig) -> Self {
        Self::new(config.min_query_len, &config.query_strip_phrase)
    }
}

/// The lowercased forms a query is matched with.
struct Needles {
    full: String,
    stripped: Option<String>,
}

impl Needles {
    fn matches(&self, haystack: &str) -> bool {
        let haystack = haystack.to_lowercase();
        haystack.contains(&self.full)
            || self
                .stripped
                .as_deref()
                .is_some_and(|stripped| haystack.contains(stripped))
    }
}

impl QueryFilter {
    pub fn new(min_query_len: usize, strip_phrase: &str) -> Self {
        Self {
            min_query_len,
            strip_phrase: strip_phrase.to_lowercase(),
        }
    }

    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// Whether a query is long enough to search with at all
    pub fn is_active(&self, query: &str) -> bool {
        query.chars().count() > self.min_query_len
    }

    fn needles(&self, query: &str) -> Option<Needles> {
        if !self.is_active(query) {
            return None;
        }
        let full = query.to_lowercase();
        let stripped = if self.strip_phrase.is_empty() {
            None
        } else {
            // A query of just the phrase leaves "", which matches everything.
            Some(full.replacen(&self.strip_phrase, "", 1).trim().to_string())
        };
        Some(Needles { full, stripped })
    }

    /// Items where any of `fields` contains the query.
    pub fn filter<'a, T>(&self, items: &'a [T], query: &str, fields: &[FieldFn<T>]) -> Vec<&'a T> {
        let Some(needles) = self.needles(query) else {
            return Vec::new();
        };
        items
            .iter()
            .filter(|item| fields.iter().any(|field| needles.matches(field(*item))))
            .collect()
    }
}

/// [`QueryFilter::filter`] with the default threshold and phrase.
pub fn filter_by_query<'a, T>(items: &'a [T], query: &str, fields: &[FieldFn<T>]) -> Vec<&'a T> {
    QueryFilter::default().filter(items, query, fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(s: &String) -> &str {
        s
    }

    fn questions() -> Vec<String> {
        vec![
            "How do I perform a git rebase?".to_string(),
            "How to resolve conflicts during a git rebase?".to_string(),
            "Git revert vs reset - what's the difference?".to_string(),
        ]
    }

    #[test]
    fn short_queries_match_nothing() {
        let items = questions();
        let fields: [FieldFn<String>; 1] = [identity];
        assert!(filter_by_query(&items, "", &fields).is_empty());
        assert!(filter_by_query(&items, "gi", &fields).is_empty());
        assert_eq!(filter_by_query(&items, "git", &fields).len(), 3);
    }

    #[test]
    fn match_is_case_insensitive() {
        let items = questions();
        let fields: [FieldFn<String>; 1] = [identity];
        let hits = filter_by_query(&items, "REVERT", &fields);
        assert_eq!(hits, vec![&items[2]]);
    }

    #[test]
    fn strip_phrase_catches_variants() {
        let items = questions();
        let fields: [FieldFn<String>; 1] = [identity];
        let hits = filter_by_query(&items, "how to perform a git rebase", &fields);
        assert_eq!(hits, vec![&items[0]]);
    }

    #[test]
    fn bare_strip_phrase_matches_everything() {
        let items = questions();
        let fields: [FieldFn<String>; 1] = [identity];
        assert_eq!(filter_by_query(&items, "how to", &fields).len(), 3);
        assert_eq!(filter_by_query(&items, "  HOW TO ", &fields).len(), 3);

        let commands = vec!["git rebase".to_string(), "cherry pick".to_string()];
        assert_eq!(filter_by_query(&commands, "how to", &fields).len(), 2);
    }

    #[test]
    fn custom_threshold() {
        let items = questions();
        let fields: [FieldFn<String>; 1] = [identity];
        let filter = QueryFilter::new(0, "");
        assert_eq!(filter.filter(&items, "?", &fields).len(), 3);
        assert!(filter.filter(&items, "", &fields).is_empty());
    }
}
