use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Content-derived identifier for a piece of text: lowercase hex MD5, 32 chars.
pub fn identifier_for(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}

/// Identifier → original text for every literal rewritten in one transform run.
///
/// Entries are never removed or replaced. Recording the same text again returns the
/// same identifier and leaves the map unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordMap {
    entries: BTreeMap<String, String>,
}

impl RecordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `text` and return its identifier.
    pub fn record(&mut self, text: &str) -> String {
        let id = identifier_for(text);
        match self.entries.get(&id) {
            Some(existing) if existing != text => {
                // Digest collision: first text wins.
                tracing::warn!(id = %id, kept = %existing, dropped = %text, "identifier collision");
            }
            Some(_) => {}
            None => {
                self.entries.insert(id.clone(), text.to_owned());
            }
        }
        id
    }

    /// Merge another run's records into this one.
    pub fn extend(&mut self, other: &RecordMap) {
        for text in other.entries.values() {
            self.record(text);
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(identifier, text)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
