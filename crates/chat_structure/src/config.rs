use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatStructureError, Result};

pub const DEFAULT_PLACEHOLDER_REPLY: &str = "This is a dummy answer to your question";
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_QUERY_STRIP_PHRASE: &str = "how to";

const CONFIG_FILE_PATH: &str = "chat_structure.toml";

/// Tunables shared by the tree, transcript and search helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Text used for every generated assistant reply
    #[serde(default = "default_placeholder_reply")]
    pub placeholder_reply: String,
    /// Queries with this many characters or fewer never match
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Phrase removed from a query before the second match attempt
    #[serde(default = "default_query_strip_phrase")]
    pub query_strip_phrase: String,
}

fn default_placeholder_reply() -> String {
    DEFAULT_PLACEHOLDER_REPLY.to_string()
}

fn default_min_query_len() -> usize {
    DEFAULT_MIN_QUERY_LEN
}

fn default_query_strip_phrase() -> String {
    DEFAULT_QUERY_STRIP_PHRASE.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            placeholder_reply: default_placeholder_reply(),
            min_query_len: default_min_query_len(),
            query_strip_phrase: default_query_strip_phrase(),
        }
    }
}

impl ChatConfig {
    /// Defaults, then `chat_structure.toml` in the working directory if it
    /// parses, then environment overrides.
    pub fn load() -> Self {
        let mut config = ChatConfig::default();

        if Path::new(CONFIG_FILE_PATH).exists() {
            match Self::from_file(CONFIG_FILE_PATH) {
                Ok(file_config) => config = file_config,
                Err(e) => tracing::warn!(path = CONFIG_FILE_PATH, error = %e, "Ignoring config file"),
            }
        }

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Read a config file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ChatStructureError::Config(format!("{}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content)
                .map_err(|e| ChatStructureError::Config(format!("{}: {}", path.display(), e)))
        } else {
            toml::from_str(&content)
                .map_err(|e| ChatStructureError::Config(format!("{}: {}", path.display(), e)))
        }
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(reply) = lookup("CHAT_PLACEHOLDER_REPLY") {
            self.placeholder_reply = reply;
        }
        if let Some(len) = lookup("CHAT_MIN_QUERY_LEN") {
            match len.trim().parse() {
                Ok(len) => self.min_query_len = len,
                Err(_) => tracing::warn!(value = %len, "Ignoring invalid CHAT_MIN_QUERY_LEN"),
            }
        }
        if let Some(phrase) = lookup("CHAT_QUERY_STRIP_PHRASE") {
            self.query_strip_phrase = phrase;
        }
    }
}
