use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::{AktaraError, Result};

/// Key-value store backed by a JSON object file
#[derive(Debug, Clone)]
pub struct FileStore {
    file: PathBuf,
}

impl FileStore {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Read the whole map; a missing or unreadable file reads as empty
    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(data) = std::fs::read_to_string(&self.file) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!(path = %self.file.display(), error = %e, "storage file is corrupt, starting empty");
            BTreeMap::new()
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.file.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.file, json).map_err(|e| {
            AktaraError::Storage(format!("cannot write {}: {e}", self.file.display()))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}
