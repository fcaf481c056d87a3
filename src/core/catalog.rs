use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::core::records::RecordMap;

/// Outcome of inserting one record into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    /// Key already present with the same text.
    Unchanged,
    /// Key already present with different text; the existing value is kept.
    Conflict,
}

/// Counts from merging a [`RecordMap`] into a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub unchanged: usize,
    /// Keys whose existing value differs from the recorded text.
    pub conflicts: Vec<String>,
}

/// Flat `identifier → text` JSON message file for one locale.
pub struct MessageCatalog {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl MessageCatalog {
    /// Open an existing catalog or start an empty one at `path`.
    pub fn open_or_create(path: &Path) -> Result<Self> {
        let data = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            let value: Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
            match value {
                Value::Object(map) => map,
                _ => bail!("Root of JSON file must be an object: {}", path.display()),
            }
        } else {
            Map::new()
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.data.get(id).and_then(Value::as_str)
    }

    /// Insert `id → text` unless the key already exists.
    pub fn insert(&mut self, id: &str, text: &str) -> KeyAction {
        match self.data.get(id) {
            Some(Value::String(existing)) if existing == text => KeyAction::Unchanged,
            Some(_) => KeyAction::Conflict,
            None => {
                self.data.insert(id.to_owned(), Value::String(text.to_owned()));
                KeyAction::Added
            }
        }
    }

    pub fn merge(&mut self, records: &RecordMap) -> MergeStats {
        let mut stats = MergeStats::default();
        for (id, text) in records.iter() {
            match self.insert(id, text) {
                KeyAction::Added => stats.added += 1,
                KeyAction::Unchanged => stats.unchanged += 1,
                KeyAction::Conflict => stats.conflicts.push(id.to_owned()),
            }
        }
        stats
    }

    /// Save with 2-space indentation and a trailing newline.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(&self.data).context("Failed to serialize JSON")?;

        fs::write(&self.file_path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}
