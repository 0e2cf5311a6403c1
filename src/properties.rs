//! Properties-style key/value configuration files
//!
//! Parses the classic `.properties` text format: one `key = value` (or
//! `key: value`) entry per line, `#` and `!` comments, blank lines, and
//! trailing-backslash continuations. Entries keep their insertion order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::trace;

use crate::error::{PropertiesError, Result};

/// An ordered key/value store parsed from properties text
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses properties from text
    pub fn load_str(text: &str) -> Result<Self> {
        let mut properties = Self::new();
        let mut pending: Option<(usize, String)> = None;

        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let (start, logical) = match pending.take() {
                Some((start, prefix)) => (start, prefix + line),
                None => {
                    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                        continue;
                    }
                    (number + 1, line.to_string())
                }
            };

            // a trailing backslash continues the entry on the next line;
            // whitespace before the backslash is kept, the next line's
            // leading whitespace is not
            if let Some(stripped) = logical.strip_suffix('\\') {
                pending = Some((start, stripped.to_string()));
                continue;
            }

            properties.parse_entry(start, &logical)?;
        }

        if let Some((start, logical)) = pending {
            // a dangling continuation still carries a full entry
            properties.parse_entry(start, &logical)?;
        }

        trace!(entries = properties.len(), "loaded properties");
        Ok(properties)
    }

    /// Parses properties from a file
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(PropertiesError::Io)?;
        Self::load_str(&text)
    }

    fn parse_entry(&mut self, line: usize, logical: &str) -> Result<()> {
        let separator = logical.find(['=', ':']);
        let (key, value) = match separator {
            Some(at) => (logical[..at].trim(), logical[at + 1..].trim()),
            None => (logical, ""),
        };
        if key.is_empty() {
            return Err(PropertiesError::Malformed {
                line,
                content: logical.to_string(),
            }
            .into());
        }
        self.set(key, value);
        Ok(())
    }

    /// The value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&at| self.entries[at].1.as_str())
    }

    /// The value for `key`, or a default
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Stores a value, keeping the position of an existing key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&at) => self.entries[at].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Folds another set of properties in; the other's values win
    pub fn merge(&mut self, other: &Properties) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parses_entries_comments_and_blanks() {
        let properties = Properties::load_str(
            "# header comment\n\
             name = lattice\n\
             ! another comment\n\
             \n\
             mode: fast\n\
             bare\n",
        )
        .unwrap();
        assert_eq!(properties.get("name"), Some("lattice"));
        assert_eq!(properties.get("mode"), Some("fast"));
        assert_eq!(properties.get("bare"), Some(""));
        assert_eq!(properties.len(), 3);
    }

    #[test]
    fn continuation_lines_are_joined() {
        let properties = Properties::load_str("list = one, \\\n    two, \\\n    three\n").unwrap();
        assert_eq!(properties.get("list"), Some("one, two, three"));
    }

    #[test]
    fn empty_keys_are_malformed() {
        let err = Properties::load_str("= value").unwrap_err();
        assert!(matches!(
            err,
            Error::PropertiesError(PropertiesError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn insertion_order_and_override() {
        let mut properties = Properties::load_str("a = 1\nb = 2\n").unwrap();
        properties.set("a", "10");
        let keys: Vec<_> = properties.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(properties.get("a"), Some("10"));
    }

    #[test]
    fn merge_prefers_the_other_side() {
        let mut base = Properties::load_str("a = 1\nb = 2\n").unwrap();
        let overlay = Properties::load_str("b = 20\nc = 30\n").unwrap();
        base.merge(&overlay);
        assert_eq!(base.get("b"), Some("20"));
        assert_eq!(base.get("c"), Some("30"));
        assert_eq!(base.len(), 3);
    }
}
